//! # API Module
//!
//! HTTP endpoints of the proxy. Each data route follows the same path:
//! session guard → parameter validation → one or more Spotify calls →
//! reshape → JSON reply. Failures at any step become an [`ApiError`] and
//! are rendered as a status code plus a plaintext message; nothing escapes
//! the handler.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `302` to Spotify's authorize page
//! - [`callback`] - exchanges the authorization code and stores the credential
//!   for the caller's session
//! - [`logout`] - forgets the session's credential
//!
//! ### Data (guarded by [`AuthorizedSession`])
//!
//! - [`search`] - track search reduced to track summaries
//! - [`saved_songs`] - saved tracks, raw passthrough
//! - [`my_playlists`] - own playlists with embedded tracks
//! - [`user_playlists`] - another user's public playlists
//!
//! ### Monitoring
//!
//! - [`health`] - status and version

use std::sync::Arc;

use crate::{config::Config, management::SessionManager, spotify::SpotifyClient};

mod callback;
mod error;
mod health;
mod library;
mod login;
mod playlists;
mod search;
mod session;

pub use callback::{LOGIN_FAILURE_MESSAGE, LOGIN_SUCCESS_MESSAGE, callback};
pub use error::ApiError;
pub use health::health;
pub use library::saved_songs;
pub use login::{login, logout};
pub use playlists::{DEFAULT_MARKET, my_playlists, user_playlists};
pub use search::{DEFAULT_SEARCH_LIMIT, search};
pub use session::AuthorizedSession;

/// Everything a handler needs, installed on the router as an `Extension`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: SpotifyClient,
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = config.http_client()?;
        Ok(Self {
            spotify: SpotifyClient::new(http, config.api_url.clone()),
            config: Arc::new(config),
            sessions: SessionManager::new(),
        })
    }
}
