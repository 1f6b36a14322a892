use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{Res, api};

pub fn router(state: api::AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/logout", get(api::logout))
        .route("/search", get(api::search))
        .route("/saved-songs", get(api::saved_songs))
        .route("/my-playlists", get(api::my_playlists))
        .route("/user-playlists", get(api::user_playlists))
        .layer(Extension(state))
}

/// Serves the proxy on an already bound listener until the process stops.
pub async fn start_api_server(listener: TcpListener, state: api::AppState) -> Res<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
