use derive_more::derive::Display;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display("{}", driver_ref)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: i64,
    #[serde(rename = "driverRef")]
    pub driver_ref: String,
    pub forename: String,
    pub surname: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Driver {
    pub const COLUMNS: &'static [&'static str] = &["driverId", "driverRef", "forename", "surname"];
}
