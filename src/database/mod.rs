use crate::domain::{Circuit, Constructor, Driver, Race};
use anyhow::Result;
use async_trait::async_trait;

pub mod row;
pub mod sqlite;

// read-only access to the F1 store, shared by every in-flight request
// sqlx::Pool is thread safe, so implementations hold one and never lock
#[async_trait]
pub trait F1Repository: Send + Sync {
    async fn list_circuits(&self) -> Result<Vec<Circuit>>;
    async fn get_circuit_by_id(&self, id: f64) -> Result<Option<Circuit>>;
    async fn get_circuit_by_ref(&self, circuit_ref: &str) -> Result<Option<Circuit>>;

    // race rows always carry the joined circuit name, location and country
    async fn list_races(&self) -> Result<Vec<Race>>;
    async fn get_races_by_circuit_ref(&self, circuit_ref: &str) -> Result<Vec<Race>>;
    async fn get_race_by_year_round(&self, year: &str, round: &str) -> Result<Option<Race>>;
    async fn get_races_by_season(&self, year: &str) -> Result<Vec<Race>>;

    async fn list_drivers(&self) -> Result<Vec<Driver>>;
    async fn get_driver_by_ref(&self, driver_ref: &str) -> Result<Option<Driver>>;

    async fn list_constructors(&self) -> Result<Vec<Constructor>>;
    async fn get_constructor_by_ref(&self, constructor_ref: &str) -> Result<Option<Constructor>>;
}
