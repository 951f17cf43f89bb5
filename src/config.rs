//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_ROOM_FLUSH_INTERVAL_MS: u64 = 250;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub room_flush_interval_ms: u64,
    pub static_dir: PathBuf,
    pub export_load_system_fonts: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3001
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ROOM_FLUSH_INTERVAL_MS`: default 250, minimum 1
    /// - `STATIC_DIR`: default `public`
    /// - `EXPORT_LOAD_SYSTEM_FONTS`: default true
    ///
    /// # Errors
    ///
    /// Returns `Missing` when `DATABASE_URL` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `Missing` when `DATABASE_URL` is unset or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            port: env_parse(lookup("PORT"), DEFAULT_PORT),
            db_max_connections: env_parse(lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS).max(1),
            room_flush_interval_ms: env_parse(lookup("ROOM_FLUSH_INTERVAL_MS"), DEFAULT_ROOM_FLUSH_INTERVAL_MS).max(1),
            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
            export_load_system_fonts: lookup("EXPORT_LOAD_SYSTEM_FONTS")
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or(true),
        })
    }
}

/// Parse a raw variable, falling back to `default` when it is unset or does
/// not parse.
fn env_parse<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
