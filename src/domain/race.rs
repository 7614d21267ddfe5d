use derive_more::derive::Display;
use serde::Serialize;
use serde_json::{Map, Value};

/// A race row joined with the name, location and country of its circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display("{} round {}", year, round)]
pub struct Race {
    #[serde(rename = "raceId")]
    pub race_id: i64,
    pub year: i64,
    pub round: i64,
    #[serde(rename = "circuitId")]
    pub circuit_id: i64,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Race {
    pub const COLUMNS: &'static [&'static str] = &[
        "raceId",
        "year",
        "round",
        "circuitId",
        "circuitName",
        "location",
        "country",
    ];
}
