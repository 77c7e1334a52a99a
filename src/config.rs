use anyhow::{bail, Context, Result};
use std::env;

use crate::runtime::DEFAULT_CHANNEL_CAPACITY;

const DEFAULT_LOG_FILTER: &str = "campus_registry=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub channel_capacity: usize,
    pub log_filter: String,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("APP_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        let channel_capacity = match lookup("CAMPUS_CHANNEL_CAPACITY") {
            Some(raw) => raw
                .parse::<usize>()
                .context("CAMPUS_CHANNEL_CAPACITY must be a valid usize")?,
            None => DEFAULT_CHANNEL_CAPACITY,
        };
        if channel_capacity == 0 {
            bail!("CAMPUS_CHANNEL_CAPACITY must be greater than zero");
        }

        let log_filter = lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            channel_capacity,
            log_filter,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
