use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Default `limit` for the match endpoints when the caller omits it.
    pub match_default_limit: usize,
    /// Default `minScore` for the match endpoints when the caller omits it.
    pub match_default_min_score: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_default_limit: parse_env("MATCH_DEFAULT_LIMIT", 10)?,
            match_default_min_score: parse_env("MATCH_DEFAULT_MIN_SCORE", 50.0)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid value, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Config for handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/zirak_test".to_string(),
            database_max_connections: 1,
            port: 0,
            rust_log: "debug".to_string(),
            match_default_limit: 10,
            match_default_min_score: 50.0,
        }
    }
}
