use thiserror::Error;

/// Failure of a call to the Spotify accounts service or Web API.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The request never produced a response (connect error, timeout, ...).
    #[error("request to Spotify failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Spotify answered with an error, either a non-2xx status or an
    /// `error` object in the body.
    #[error("Spotify returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("unexpected response from Spotify: {0}")]
    UnexpectedShape(String),

    #[error("invalid Spotify URL: {0}")]
    InvalidUrl(String),

    #[error("background request failed: {0}")]
    Task(String),
}
