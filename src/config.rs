//! Environment configuration
//!
//! The client is configured entirely through `BASE_URL` and `USER_TOKEN`,
//! read from the process environment with an optional `.env` file on top.

use crate::error::{Error, Result};

/// Connection settings for the platform API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint every request path is appended to.
    pub base_url: String,
    /// Token sent as `Authorization: Basic <token>` on every request.
    pub user_token: String,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first when
    /// one is present.
    pub fn from_env() -> Result<Self> {
        // Variables may also come from the shell directly
        let _ = dotenvy::dotenv();

        Ok(Self {
            base_url: required("BASE_URL")?,
            user_token: required("USER_TOKEN")?,
        })
    }
}

fn required(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingEnv(name)),
    }
}
