//! Configuration management for the Spotify proxy.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`spoxy/.env`)
//! 3. `.env` file in the working directory
//! 4. Application defaults (everything except the client credentials)

use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

use reqwest::{Client, Url};
use thiserror::Error;

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";
pub const DEFAULT_SCOPE: &str = "user-library-read playlist-read-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FANOUT_LIMIT: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration of the proxy and the console utilities.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: SocketAddr,
    /// Upper bound for every single outbound call.
    pub request_timeout: Duration,
    /// Maximum number of playlist track requests in flight at once.
    pub fanout_limit: usize,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. The client credentials also accept the
    /// shorter `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let client_id = var("SPOTIFY_API_AUTH_CLIENT_ID")
            .or_else(|| var("SPOTIFY_CLIENT_ID"))
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))?;
        let client_secret = var("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .or_else(|| var("SPOTIFY_CLIENT_SECRET"))
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_SECRET"))?;

        let server_addr: SocketAddr = parse_or(
            "SERVER_ADDRESS",
            var("SERVER_ADDRESS"),
            DEFAULT_SERVER_ADDRESS,
        )?;
        let timeout_secs: u64 = parse_or(
            "SPOTIFY_API_TIMEOUT_SECS",
            var("SPOTIFY_API_TIMEOUT_SECS"),
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )?;
        let fanout_limit: usize = parse_or(
            "SPOTIFY_API_FANOUT_LIMIT",
            var("SPOTIFY_API_FANOUT_LIMIT"),
            &DEFAULT_FANOUT_LIMIT.to_string(),
        )?;
        if fanout_limit == 0 {
            return Err(ConfigError::Invalid {
                name: "SPOTIFY_API_FANOUT_LIMIT",
                value: "0".to_string(),
            });
        }

        let redirect_uri =
            var("SPOTIFY_API_REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());
        if Url::parse(&redirect_uri).is_err() {
            return Err(ConfigError::Invalid {
                name: "SPOTIFY_API_REDIRECT_URI",
                value: redirect_uri,
            });
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            scope: var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            token_url: var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: var("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            server_addr,
            request_timeout: Duration::from_secs(timeout_secs),
            fanout_limit,
        })
    }

    /// HTTP client shared by every outbound call, bounded by `request_timeout`.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        Client::builder().timeout(self.request_timeout).build()
    }

    /// The proxy's own `/login` address, on the same origin as the redirect URI
    /// so the session cookie set there travels with the callback.
    pub fn login_url(&self) -> Option<String> {
        Url::parse(&self.redirect_uri)
            .and_then(|url| url.join("/login"))
            .map(String::from)
            .ok()
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    match raw.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Invalid { name, value: raw }),
    }
}

/// Loads environment variables from a `.env` file.
///
/// Looks in the platform local data directory first (`spoxy/.env`, the
/// directory is created when missing) and falls back to a `.env` in the
/// current working directory. Variables already set in the environment win.
///
/// # Errors
///
/// Fails when the data directory cannot be created or an existing `.env`
/// file cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        return Ok(());
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoxy/.env");
    path
}
