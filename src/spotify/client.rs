use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    spotify::SpotifyError,
    types::{Paging, Playlist, PlaylistItem, SearchResponse, Track},
};

/// Thin client for the Spotify Web API endpoints the proxy exposes.
///
/// Every call is attempted exactly once with the given bearer token; the
/// timeout is whatever the wrapped [`Client`] was built with.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    /// `GET /search?type=track`, returning the matched tracks in Spotify's order.
    pub async fn search_tracks(
        &self,
        token: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Track>, SpotifyError> {
        let limit = limit.to_string();
        let body = self
            .get_json(
                token,
                &["search"],
                &[("q", query), ("type", "track"), ("limit", limit.as_str())],
            )
            .await?;
        let res: SearchResponse = decode(body)?;
        Ok(res.tracks.items)
    }

    /// `GET /me/tracks`, returned untouched.
    pub async fn saved_tracks(
        &self,
        token: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, SpotifyError> {
        let limit = limit.map(|l| l.to_string());
        let offset = offset.map(|o| o.to_string());
        let mut query = Vec::new();
        if let Some(limit) = &limit {
            query.push(("limit", limit.as_str()));
        }
        if let Some(offset) = &offset {
            query.push(("offset", offset.as_str()));
        }
        self.get_json(token, &["me", "tracks"], &query).await
    }

    /// `GET /me/playlists`
    pub async fn my_playlists(&self, token: &str) -> Result<Vec<Playlist>, SpotifyError> {
        let body = self.get_json(token, &["me", "playlists"], &[]).await?;
        let page: Paging<Playlist> = decode(body)?;
        Ok(page.items)
    }

    /// `GET /playlists/{id}/tracks`, skipping entries whose track is gone.
    pub async fn playlist_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        market: &str,
    ) -> Result<Vec<Track>, SpotifyError> {
        let body = self
            .get_json(
                token,
                &["playlists", playlist_id, "tracks"],
                &[("market", market)],
            )
            .await?;
        let page: Paging<PlaylistItem> = decode(body)?;
        Ok(page.items.into_iter().filter_map(|item| item.track).collect())
    }

    /// `GET /users/{user_id}/playlists`, the user's public playlists.
    pub async fn user_playlists(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Vec<Playlist>, SpotifyError> {
        let body = self
            .get_json(token, &["users", user_id, "playlists"], &[])
            .await?;
        let page: Paging<Playlist> = decode(body)?;
        Ok(page.items)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SpotifyError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| SpotifyError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| SpotifyError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(
        &self,
        token: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Value, SpotifyError> {
        let url = self.endpoint(segments)?;
        let res = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;
        read_json(res).await
    }
}

/// Reads a Web API response body, turning error payloads into
/// [`SpotifyError::Upstream`].
///
/// Spotify reports failures as `{"error": {"status": 401, "message": "..."}}`.
/// The status inside the body wins over the HTTP status; when neither names an
/// error status the failure maps to 500.
async fn read_json(res: Response) -> Result<Value, SpotifyError> {
    let status = res.status();
    let body = res.text().await?;

    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            return Err(SpotifyError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Err(e) => return Err(SpotifyError::UnexpectedShape(e.to_string())),
    };

    if let Some(error) = value.get("error") {
        let body_status = error
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());
        let http_status = (!status.is_success()).then(|| status.as_u16());
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| error.as_str())
            .unwrap_or("Spotify API error")
            .to_string();
        return Err(SpotifyError::Upstream {
            status: body_status.or(http_status).unwrap_or(500),
            message,
        });
    }

    if !status.is_success() {
        return Err(SpotifyError::Upstream {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("request failed").to_string(),
        });
    }

    Ok(value)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, SpotifyError> {
    serde_json::from_value(value).map_err(|e| SpotifyError::UnexpectedShape(e.to_string()))
}
