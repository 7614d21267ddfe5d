use crate::database::F1Repository;
use crate::domain::{Circuit, Constructor, Driver, Race};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub const REQUIRED_TABLES: [&str; 4] = ["circuits", "races", "drivers", "constructors"];

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Opens the store read-only. A missing database file is an error, never created.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database url {}", database_url))?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database at {}", database_url))?;

        Ok(Self::new(pool))
    }

    /// Names of the tables this service reads that the store does not have.
    pub async fn missing_tables(&self) -> Result<Vec<&'static str>> {
        let present: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
                .fetch_all(&self.pool)
                .await
                .context("Failed to inspect database schema")?;

        Ok(REQUIRED_TABLES
            .into_iter()
            .filter(|table| !present.iter().any(|name| name == table))
            .collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl F1Repository for SqliteRepository {
    async fn list_circuits(&self) -> Result<Vec<Circuit>> {
        let circuits = sqlx::query_as::<_, Circuit>("SELECT * FROM circuits")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list circuits")?;

        Ok(circuits)
    }

    async fn get_circuit_by_id(&self, id: f64) -> Result<Option<Circuit>> {
        // bound as a number so "007" and "7.0" both reach circuit 7
        let circuit = sqlx::query_as::<_, Circuit>("SELECT * FROM circuits WHERE circuitId = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch circuit {}", id))?;

        Ok(circuit)
    }

    async fn get_circuit_by_ref(&self, circuit_ref: &str) -> Result<Option<Circuit>> {
        let circuit = sqlx::query_as::<_, Circuit>("SELECT * FROM circuits WHERE circuitRef = ?")
            .bind(circuit_ref)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch circuit {}", circuit_ref))?;

        Ok(circuit)
    }

    async fn list_races(&self) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT r.*, c.name AS circuitName, c.location, c.country
            FROM races r
            JOIN circuits c ON r.circuitId = c.circuitId
            ORDER BY r.year DESC, r.round ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list races")?;

        Ok(races)
    }

    async fn get_races_by_circuit_ref(&self, circuit_ref: &str) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT r.*, c.name AS circuitName, c.location, c.country
            FROM races r
            JOIN circuits c ON r.circuitId = c.circuitId
            WHERE c.circuitRef = ?
            ORDER BY r.year DESC, r.round ASC
            "#,
        )
        .bind(circuit_ref)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to list races at circuit {}", circuit_ref))?;

        Ok(races)
    }

    async fn get_race_by_year_round(&self, year: &str, round: &str) -> Result<Option<Race>> {
        let race = sqlx::query_as::<_, Race>(
            r#"
            SELECT r.*, c.name AS circuitName, c.location, c.country
            FROM races r
            JOIN circuits c ON r.circuitId = c.circuitId
            WHERE r.year = ? AND r.round = ?
            "#,
        )
        .bind(year)
        .bind(round)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to fetch race {} round {}", year, round))?;

        Ok(race)
    }

    async fn get_races_by_season(&self, year: &str) -> Result<Vec<Race>> {
        let races = sqlx::query_as::<_, Race>(
            r#"
            SELECT r.*, c.name AS circuitName, c.location, c.country
            FROM races r
            JOIN circuits c ON r.circuitId = c.circuitId
            WHERE r.year = ?
            ORDER BY r.round ASC
            "#,
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to list races of season {}", year))?;

        Ok(races)
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY surname, forename")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list drivers")?;

        Ok(drivers)
    }

    async fn get_driver_by_ref(&self, driver_ref: &str) -> Result<Option<Driver>> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE driverRef = ?")
            .bind(driver_ref)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch driver {}", driver_ref))?;

        Ok(driver)
    }

    async fn list_constructors(&self) -> Result<Vec<Constructor>> {
        let constructors =
            sqlx::query_as::<_, Constructor>("SELECT * FROM constructors ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list constructors")?;

        Ok(constructors)
    }

    async fn get_constructor_by_ref(&self, constructor_ref: &str) -> Result<Option<Constructor>> {
        let constructor =
            sqlx::query_as::<_, Constructor>("SELECT * FROM constructors WHERE constructorRef = ?")
                .bind(constructor_ref)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to fetch constructor {}", constructor_ref))?;

        Ok(constructor)
    }
}
