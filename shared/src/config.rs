//! Configuration management for the BFF.
//!
//! Everything is read from the process environment exactly once at
//! startup and injected into the client constructors; nothing looks up
//! environment variables per request.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstreams: UpstreamsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// Base URL and API key for each upstream service. The variable names
/// match the Choreo connection bindings the deployment provides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamsConfig {
    pub accounts_url: String,
    pub accounts_api_key: String,
    pub parser_url: String,
    pub parser_api_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "9090".to_string())
                    .parse()?,
            },
            upstreams: UpstreamsConfig {
                accounts_url: require("CHOREO_ACCOUNTS_CONNECTION_SERVICEURL")?,
                accounts_api_key: require("CHOREO_ACCOUNTS_CONNECTION_CHOREOAPIKEY")?,
                parser_url: require("CHOREO_BILL_PARSER_SERVICEURL")?,
                parser_api_key: require("CHOREO_BILL_PARSER_CHOREOAPIKEY")?,
            },
        })
    }
}

fn require(name: &str) -> anyhow::Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} must be set", name))
}
