use crate::error::ErrorStatusPolicy;
use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct F1Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub error_status: ErrorStatusPolicy,
    pub log_level: String,
}

impl F1Config {
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/f1.db".to_string());

        let max_connections = match std::env::var("MAX_CONNECTIONS") {
            Ok(val) => val
                .parse::<u32>()
                .with_context(|| format!("MAX_CONNECTIONS must be a positive integer, got {val:?}"))?,
            Err(_) => 15,
        };

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR must be a socket address, got {bind_addr:?}"))?;

        // legacy keeps the 200-on-error contract existing clients rely on
        let error_status = match std::env::var("ERROR_STATUS_POLICY") {
            Ok(val) => val.parse::<ErrorStatusPolicy>()?,
            Err(_) => ErrorStatusPolicy::Legacy,
        };

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            error_status,
            log_level,
        })
    }
}
