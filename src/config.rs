//! Configuration management for the artist comparison CLI.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files and bundling them into a [`Config`] value
//! that the rest of the application receives explicitly. Nothing reads
//! the environment after startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory or the working directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{Res, error::Error};

const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
const API_URL_VAR: &str = "SPOTIFY_API_URL";
const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
const MARKET_VAR: &str = "SPOTIFY_MARKET";
const HTTP_TIMEOUT_VAR: &str = "SPOTVS_HTTP_TIMEOUT";

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Everything a comparison run needs, resolved once at startup.
///
/// The URL fields default to the public Spotify endpoints and exist as
/// fields (rather than constants) so tests can point a [`Config`] at a
/// local server.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
    /// ISO 3166-1 alpha-2 country code for top-track lookups. When absent
    /// no market parameter is sent and the provider picks one.
    pub market: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    /// Reads the full configuration from the environment.
    ///
    /// Both credential variables are required; everything else falls back
    /// to a default. Validation happens here so a misconfigured run fails
    /// before the first network request is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if `SPOTIFY_API_AUTH_CLIENT_ID` or
    /// `SPOTIFY_API_AUTH_CLIENT_SECRET` is unset or blank, and
    /// [`Error::InvalidConfig`] if `SPOTVS_HTTP_TIMEOUT` is set to anything
    /// but a positive number of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use spotvs::config::Config;
    ///
    /// let config = Config::from_env()?;
    /// println!("talking to {}", config.api_url);
    /// ```
    pub fn from_env() -> Res<Self> {
        Ok(Config {
            client_id: required(CLIENT_ID_VAR)?,
            client_secret: required(CLIENT_SECRET_VAR)?,
            api_url: env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token_url: env::var(TOKEN_URL_VAR).unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            market: env::var(MARKET_VAR)
                .ok()
                .map(|market| market.trim().to_string())
                .filter(|market| !market.is_empty()),
            http_timeout: http_timeout()?,
        })
    }
}

fn required(name: &'static str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingConfig(name)),
    }
}

fn http_timeout() -> Res<Duration> {
    let raw = match env::var(HTTP_TIMEOUT_VAR) {
        Ok(raw) => raw,
        Err(_) => return Ok(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
    };

    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(Error::InvalidConfig {
            name: HTTP_TIMEOUT_VAR,
            reason: "timeout must be at least one second".to_string(),
        }),
        Err(err) => Err(Error::InvalidConfig {
            name: HTTP_TIMEOUT_VAR,
            reason: err.to_string(),
        }),
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotvs/.env`, then from a `.env` in the
/// working directory. Either file may be absent; credentials can also come
/// from the process environment alone, so a missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotvs/.env`
/// - macOS: `~/Library/Application Support/spotvs/.env`
/// - Windows: `%LOCALAPPDATA%/spotvs/.env`
///
/// # Errors
///
/// Returns an error string only if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotvs/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    let _ = dotenv::dotenv();
    Ok(())
}
