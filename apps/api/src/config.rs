use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; everything else has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the optional diagnostic database.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            database_name: optional_env("DATABASE_NAME"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Treats unset and blank variables the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Config {
    /// Config with no database wired, used by router tests.
    pub fn for_tests() -> Self {
        Config {
            database_url: None,
            database_name: None,
            port: 8000,
            rust_log: "info".to_string(),
        }
    }
}
