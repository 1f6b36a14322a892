use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

use crate::{
    api::{ApiError, AppState, AuthorizedSession},
    types::TrackSummary,
};

pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
const MAX_SEARCH_LIMIT: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<u32>,
}

/// Track search, best matches first.
///
/// A search response without `tracks.items` is treated as malformed (500),
/// never as an empty result.
pub async fn search(
    session: AuthorizedSession,
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TrackSummary>>, ApiError> {
    let query = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or(ApiError::MissingParameter("Please provide a search query."))?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let tracks = state
        .spotify
        .search_tracks(session.access_token(), &query, limit)
        .await?;

    Ok(Json(tracks.into_iter().map(TrackSummary::from).collect()))
}
