use derive_more::derive::Display;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[display("{}", constructor_ref)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: i64,
    #[serde(rename = "constructorRef")]
    pub constructor_ref: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Constructor {
    pub const COLUMNS: &'static [&'static str] = &["constructorId", "constructorRef", "name"];
}
