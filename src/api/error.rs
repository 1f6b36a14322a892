use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{spotify::SpotifyError, warning};

/// Failure of a proxy route, rendered as a plaintext HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing access token. Please log in.")]
    MissingCredential,

    #[error("{0}")]
    MissingParameter(&'static str),

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("network failure: {0}")]
    Network(String),

    /// One of the per-playlist track listings failed; the upstream status is
    /// not proxied for these.
    #[error("playlist tracks unavailable: {0}")]
    PlaylistTracks(String),

    #[error("Invalid login state. Please log in again.")]
    InvalidLoginState,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SpotifyError> for ApiError {
    fn from(err: SpotifyError) -> Self {
        match err {
            SpotifyError::Network(e) => ApiError::Network(e.to_string()),
            SpotifyError::Upstream { status, message } => ApiError::Upstream { status, message },
            SpotifyError::UnexpectedShape(detail) => ApiError::UnexpectedShape(detail),
            SpotifyError::InvalidUrl(detail) | SpotifyError::Task(detail) => {
                ApiError::Internal(detail)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingCredential => {
                (StatusCode::UNAUTHORIZED, ApiError::MissingCredential.to_string())
            }
            ApiError::MissingParameter(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::InvalidLoginState => {
                warning!("Rejected a callback without a matching login");
                (StatusCode::BAD_REQUEST, ApiError::InvalidLoginState.to_string())
            }
            ApiError::Upstream { status, message } => {
                warning!("Spotify responded with {}: {}", status, message);
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, message)
            }
            ApiError::UnexpectedShape(detail) => {
                warning!("Unexpected Spotify response: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected response from Spotify.".to_string(),
                )
            }
            ApiError::Network(detail) => {
                warning!("Spotify request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error contacting Spotify.".to_string(),
                )
            }
            ApiError::PlaylistTracks(detail) => {
                warning!("Playlist track listing failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving playlist tracks.".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                warning!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
