use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiError, AppState, AuthorizedSession};

#[derive(Debug, Deserialize)]
pub struct SavedSongsParams {
    limit: Option<u32>,
    offset: Option<u32>,
}

/// The user's saved tracks, passed through exactly as Spotify returns them.
pub async fn saved_songs(
    session: AuthorizedSession,
    Extension(state): Extension<AppState>,
    Query(params): Query<SavedSongsParams>,
) -> Result<Json<Value>, ApiError> {
    let body = state
        .spotify
        .saved_tracks(session.access_token(), params.limit, params.offset)
        .await?;
    Ok(Json(body))
}
