use tabled::Table;

use crate::{
    config::Config,
    error, info,
    spotify::{SpotifyClient, auth},
    types::{TrackSummary, TrackTableRow},
    utils, warning,
};

/// Console search backed by a client-credentials token.
///
/// Prints the top match line by line, or a table when several results were
/// requested and found.
pub async fn search(config: &Config, query: &str, limit: u32) {
    let http = match config.http_client() {
        Ok(http) => http,
        Err(e) => error!("Cannot create HTTP client: {}", e),
    };

    let pb = utils::spinner("Searching Spotify...");

    let credential = match auth::client_credentials(&http, config).await {
        Ok(credential) => credential,
        Err(e) => {
            pb.finish_and_clear();
            error!("Error getting access token: {}", e);
        }
    };

    let client = SpotifyClient::new(http, config.api_url.clone());
    let tracks = match client
        .search_tracks(&credential.access_token, query, limit.max(1))
        .await
    {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Error fetching song: {}", e);
        }
    };
    pb.finish_and_clear();

    let tracks: Vec<TrackSummary> = tracks.into_iter().map(TrackSummary::from).collect();
    match tracks.as_slice() {
        [] => warning!("No song found!"),
        [track] => {
            info!("Song: {}", track.song);
            info!("Artist: {}", track.artist);
            info!("Spotify URL: {}", track.spotify_url);
        }
        _ => {
            let table_rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
            let table = Table::new(table_rows);
            println!("{}", table);
        }
    }
}
