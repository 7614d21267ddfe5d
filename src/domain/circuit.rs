use derive_more::derive::Display;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display("{}", circuit_ref)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    pub circuit_id: i64,
    #[serde(rename = "circuitRef")]
    pub circuit_ref: String,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Circuit {
    pub const COLUMNS: &'static [&'static str] =
        &["circuitId", "circuitRef", "name", "location", "country"];
}
