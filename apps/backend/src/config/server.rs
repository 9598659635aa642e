use std::env;

use crate::domain::SampleRange;
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4567;

/// HTTP listener and draw settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub sample_range: SampleRange,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sample_range: SampleRange::default(),
        }
    }
}

impl ServerConfig {
    /// Read `BINGO_HOST`, `BINGO_PORT` and `BINGO_FULL_RANGE`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BINGO_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("BINGO_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BINGO_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let sample_range = match env::var("BINGO_FULL_RANGE") {
            Ok(raw) => {
                if parse_flag(&raw)? {
                    SampleRange::Full
                } else {
                    SampleRange::Legacy
                }
            }
            Err(_) => SampleRange::default(),
        };

        Ok(Self {
            host,
            port,
            sample_range,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "BINGO_FULL_RANGE must be a boolean flag, got '{other}'"
        ))),
    }
}
