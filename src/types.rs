use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// OAuth grant that produced a [`Credential`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantFlow {
    ClientCredentials,
    AuthorizationCode,
}

impl fmt::Display for GrantFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantFlow::ClientCredentials => write!(f, "client credentials"),
            GrantFlow::AuthorizationCode => write!(f, "authorization code"),
        }
    }
}

/// A bearer token for the Spotify Web API.
///
/// Expiry is recorded but never acted upon: an expired token only surfaces
/// through the upstream 401 it provokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub flow: GrantFlow,
    pub expires_in: Option<u64>,
    /// Granted scopes, space separated. Absent for app-only tokens.
    pub scope: Option<String>,
    pub obtained_at: DateTime<Utc>,
}

impl Credential {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        Some(self.obtained_at + Duration::seconds(secs))
    }
}

/// Body of the accounts service token endpoint, success or failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<SimpleArtist>,
    pub album: SimpleAlbum,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Paging<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: PlaylistTracksRef,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    /// Spotify sends `null` instead of an empty list for playlists without a cover.
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

/// Entry of a playlist's track listing. `track` is null for removed or
/// unavailable items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

/// Reduced view of a track served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub song: String,
    /// Artist names joined with `", "`.
    pub artist: String,
    pub artists: Vec<String>,
    pub album: String,
    pub album_art: Option<String>,
    pub preview_url: Option<String>,
    pub spotify_url: String,
}

impl From<Track> for TrackSummary {
    fn from(track: Track) -> Self {
        let artists: Vec<String> = track.artists.into_iter().map(|a| a.name).collect();
        Self {
            song: track.name,
            artist: utils::join_names(&artists),
            artists,
            album_art: utils::first_image_url(&track.album.images),
            album: track.album.name,
            preview_url: track.preview_url,
            spotify_url: track.external_urls.spotify.unwrap_or_default(),
        }
    }
}

/// Reduced view of a playlist, optionally with its tracks embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub name: String,
    pub id: String,
    pub total_tracks: u64,
    pub spotify_url: String,
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackSummary>>,
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        Self {
            image: playlist
                .images
                .as_deref()
                .and_then(utils::first_image_url),
            name: playlist.name,
            id: playlist.id,
            total_tracks: playlist.tracks.total,
            spotify_url: playlist.external_urls.spotify.unwrap_or_default(),
            tracks: None,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub song: String,
    pub artist: String,
    pub album: String,
    pub url: String,
}

impl From<&TrackSummary> for TrackTableRow {
    fn from(track: &TrackSummary) -> Self {
        Self {
            song: track.song.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            url: track.spotify_url.clone(),
        }
    }
}
