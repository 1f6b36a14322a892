//! # Spotify Integration Module
//!
//! Everything that talks to Spotify lives here:
//!
//! - [`auth`] - token provider for the client-credentials and
//!   authorization-code grants (`POST /api/token` on the accounts service)
//! - [`SpotifyClient`] - Web API calls used by the proxy routes and the
//!   console search (`/search`, `/me/tracks`, `/me/playlists`,
//!   `/playlists/{id}/tracks`, `/users/{id}/playlists`)
//! - [`playlists`] - bounded concurrent fetch of several playlists' tracks
//!
//! ## Error Handling
//!
//! All calls return [`SpotifyError`]. Nothing is retried: each request is
//! attempted once and the outcome is reported to the caller, which decides
//! how to present it (HTTP status in the proxy, console message in the CLI).
//! Timeouts come from the `reqwest::Client` the caller supplies.

pub mod auth;
mod client;
mod error;
pub mod playlists;

pub use client::SpotifyClient;
pub use error::SpotifyError;
