use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

use crate::{
    api::{ApiError, AppState, AuthorizedSession},
    spotify::playlists,
    types::{PlaylistSummary, TrackSummary},
};

pub const DEFAULT_MARKET: &str = "US";

#[derive(Debug, Deserialize)]
pub struct MyPlaylistsParams {
    market: Option<String>,
}

/// The logged-in user's playlists, each with its tracks embedded.
///
/// Track listings are fetched concurrently and attached by playlist id. If
/// any listing fails the whole request fails with a 500, whatever status
/// Spotify gave for that listing.
pub async fn my_playlists(
    session: AuthorizedSession,
    Extension(state): Extension<AppState>,
    Query(params): Query<MyPlaylistsParams>,
) -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    let market = params
        .market
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MARKET.to_string());
    let token = session.access_token();

    let owned = state.spotify.my_playlists(token).await?;
    let ids = owned.iter().map(|p| p.id.clone()).collect();
    let tracks = playlists::tracks_for_playlists(
        &state.spotify,
        token,
        ids,
        &market,
        state.config.fanout_limit,
    )
    .await
    .map_err(|e| ApiError::PlaylistTracks(e.to_string()))?;

    let summaries = owned
        .into_iter()
        .map(|playlist| {
            // duplicate ids in the listing share one fetched track list
            let listing = tracks.get(&playlist.id).cloned().unwrap_or_default();
            let mut summary = PlaylistSummary::from(playlist);
            summary.tracks = Some(listing.into_iter().map(TrackSummary::from).collect());
            summary
        })
        .collect();

    Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
pub struct UserPlaylistsParams {
    user_id: Option<String>,
}

/// Public playlists of any Spotify user, without tracks.
pub async fn user_playlists(
    session: AuthorizedSession,
    Extension(state): Extension<AppState>,
    Query(params): Query<UserPlaylistsParams>,
) -> Result<Json<Vec<PlaylistSummary>>, ApiError> {
    let user_id = params
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or(ApiError::MissingParameter("Please provide a Spotify user ID."))?;

    let playlists = state
        .spotify
        .user_playlists(session.access_token(), &user_id)
        .await?;

    Ok(Json(playlists.into_iter().map(PlaylistSummary::from).collect()))
}
