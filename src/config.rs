use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub discord_token: String,
    pub api_secret: String,

    /// Destination channel for form submissions. Deliberately optional at
    /// startup; a missing value is reported per-request as a 500 so the
    /// upstream trigger sees the misconfiguration in its execution log.
    pub channel_id: Option<String>,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            api_secret: std::env::var("API_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("API_SECRET".to_string()))?,
            channel_id: std::env::var("FORM_SUBMISSION_CHANNEL_ID").ok(),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
