use std::{collections::HashMap, sync::Arc};

use tokio::{sync::Semaphore, task::JoinSet};

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::Track,
};

/// Fetches the track listings of several playlists concurrently.
///
/// At most `limit` requests are in flight at once. Results are keyed by
/// playlist id, so completion order does not matter. The join is
/// all-or-nothing: the first failed listing is returned and the requests
/// still running are aborted.
pub async fn tracks_for_playlists(
    client: &SpotifyClient,
    token: &str,
    playlist_ids: Vec<String>,
    market: &str,
    limit: usize,
) -> Result<HashMap<String, Vec<Track>>, SpotifyError> {
    let permits = Arc::new(Semaphore::new(limit.max(1)));
    let mut tasks = JoinSet::new();

    for playlist_id in playlist_ids {
        let client = client.clone();
        let token = token.to_string();
        let market = market.to_string();
        let permits = Arc::clone(&permits);

        tasks.spawn(async move {
            // the semaphore is never closed
            let _permit = permits.acquire_owned().await.ok();
            let tracks = client.playlist_tracks(&token, &playlist_id, &market).await;
            (playlist_id, tracks)
        });
    }

    let mut by_playlist = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (playlist_id, tracks) = joined.map_err(|e| SpotifyError::Task(e.to_string()))?;
        by_playlist.insert(playlist_id, tracks?);
    }

    Ok(by_playlist)
}
