use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_WOM_API_URL: &str = "https://api.wiseoldman.net/v2";
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 5;
const DEFAULT_RATE_LIMIT_BURST: u32 = 20;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    /// Bearer token every `/guilds` request must carry.
    pub api_token: String,
    pub listen_addr: SocketAddr,

    pub wom_api_url: String,

    /// Sustained requests per second allowed per peer address.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            api_token: required("API_TOKEN")?,
            listen_addr: parsed("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
            wom_api_url: std::env::var("WOM_API_URL")
                .unwrap_or_else(|_| DEFAULT_WOM_API_URL.to_string()),
            rate_limit_per_second: parsed("RATE_LIMIT_PER_SECOND", DEFAULT_RATE_LIMIT_PER_SECOND)?,
            rate_limit_burst: parsed("RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?,
            request_timeout_secs: parsed("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
