//! Spotify Web API Proxy Library
//!
//! This library backs the `spoxy` binary: a small HTTP service that drives the
//! Spotify OAuth 2.0 flows and serves reduced, UI-friendly views of songs,
//! saved tracks and playlists, plus a standalone console search.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers, the session guard and HTTP error mapping
//! - `cli` - Command-line entry points (serve, search, token)
//! - `config` - Configuration management and environment variables
//! - `management` - Per-session credential storage
//! - `server` - Router assembly and the listening loop
//! - `spotify` - Spotify Web API client and token provider
//! - `types` - Upstream payloads, credentials and response summaries
//! - `utils` - Small helpers (session ids, cookies, URLs, formatting)
//!
//! # Example
//!
//! ```
//! use spoxy::{config, server, api::AppState};
//!
//! #[tokio::main]
//! async fn main() -> spoxy::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
//!     server::start_api_server(listener, AppState::new(config)?).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the command-line boundary where typed errors from the different
/// layers meet. Keeps `Send + Sync` so it can cross task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Server running on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command-line boundary. Route handlers never call it;
/// they convert failures into HTTP responses instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, e.g. a failed upstream call that is turned
/// into an HTTP error response.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
