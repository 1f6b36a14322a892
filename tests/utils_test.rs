use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderValue, header};
use serde_json::json;
use spoxy::config::{Config, ConfigError};
use spoxy::types::{Playlist, PlaylistSummary, Track, TrackSummary};
use spoxy::utils::*;

// Helper function to build a configuration from a fixed set of variables
fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

fn test_config() -> Config {
    config_from(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client-id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "client-secret"),
    ])
    .unwrap()
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(id, generate_session_id());
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");
}

#[test]
fn test_build_authorize_url() {
    let url = build_authorize_url(&test_config(), "xyz789").unwrap();

    assert!(url.as_str().starts_with("https://accounts.spotify.com/authorize?"));
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-id");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], "http://localhost:3000/callback");
    assert_eq!(params["scope"], "user-library-read playlist-read-private");
    assert_eq!(params["state"], "xyz789");
}

#[test]
fn test_generate_login_state() {
    let state = generate_login_state();

    assert!(state.len() >= 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_login_state());
}

#[test]
fn test_session_id_from_headers() {
    let mut headers = HeaderMap::new();
    assert_eq!(session_id_from_headers(&headers), None);

    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("theme=dark; spoxy_session=abc123; lang=en"),
    );
    assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));

    headers.insert(header::COOKIE, HeaderValue::from_static("spoxy_session="));
    assert_eq!(session_id_from_headers(&headers), None);

    headers.insert(header::COOKIE, HeaderValue::from_static("other_session=abc"));
    assert_eq!(session_id_from_headers(&headers), None);
}

#[test]
fn test_session_cookie() {
    let cookie = session_cookie("abc");

    assert!(cookie.starts_with("spoxy_session=abc;"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[test]
fn test_mask_secret() {
    assert_eq!(mask_secret("short"), "*****");
    assert_eq!(mask_secret("BQDabcdefghijklXYZ1"), "BQDa…XYZ1");
}

#[test]
fn test_track_summary_from_track() {
    let track: Track = serde_json::from_value(json!({
        "id": "0VjIjW4GlUZAMYd2vXMi3b",
        "name": "Blinding Lights",
        "artists": [{ "name": "The Weeknd" }, { "name": "Rosalía" }],
        "album": {
            "name": "After Hours",
            "images": [
                { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
                { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 }
            ]
        },
        "preview_url": null,
        "external_urls": { "spotify": "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b" }
    }))
    .unwrap();

    let summary = TrackSummary::from(track);

    assert_eq!(summary.song, "Blinding Lights");
    assert_eq!(summary.artist, "The Weeknd, Rosalía");
    assert_eq!(summary.artists, vec!["The Weeknd", "Rosalía"]);
    assert_eq!(summary.album, "After Hours");
    assert_eq!(
        summary.album_art.as_deref(),
        Some("https://i.scdn.co/image/large")
    );
    assert_eq!(summary.preview_url, None);
    assert_eq!(
        summary.spotify_url,
        "https://open.spotify.com/track/0VjIjW4GlUZAMYd2vXMi3b"
    );
}

#[test]
fn test_track_summary_without_album_art() {
    let track: Track = serde_json::from_value(json!({
        "name": "Local File",
        "artists": [],
        "album": { "name": "" }
    }))
    .unwrap();

    let summary = TrackSummary::from(track);

    assert_eq!(summary.album_art, None);
    assert_eq!(summary.artist, "");
    assert_eq!(summary.spotify_url, "");
}

#[test]
fn test_playlist_summary_from_playlist() {
    let playlist: Playlist = serde_json::from_value(json!({
        "id": "37i9dQZF1DXcBWIGoYBM5M",
        "name": "Today's Top Hits",
        "tracks": { "href": "https://api.spotify.com/v1/playlists/x/tracks", "total": 50 },
        "external_urls": { "spotify": "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M" },
        "images": null
    }))
    .unwrap();

    let summary = PlaylistSummary::from(playlist);

    assert_eq!(summary.name, "Today's Top Hits");
    assert_eq!(summary.total_tracks, 50);
    assert_eq!(summary.image, None);
    assert_eq!(summary.tracks, None);

    // tracks are only serialized when embedded
    let value = serde_json::to_value(&summary).unwrap();
    assert!(value.get("tracks").is_none());
    assert_eq!(value["image"], serde_json::Value::Null);
}

#[test]
fn test_config_defaults() {
    let config = test_config();

    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.token_url, "https://accounts.spotify.com/api/token");
    assert_eq!(config.server_addr.port(), 3000);
    assert_eq!(config.request_timeout.as_secs(), 10);
    assert_eq!(config.fanout_limit, 8);
    assert_eq!(
        config.login_url().as_deref(),
        Some("http://localhost:3000/login")
    );
}

#[test]
fn test_config_requires_credentials() {
    assert_eq!(
        config_from(&[("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret")]).unwrap_err(),
        ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID")
    );
    assert_eq!(
        config_from(&[
            ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
            ("SPOTIFY_API_AUTH_CLIENT_SECRET", "  "),
        ])
        .unwrap_err(),
        ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_SECRET")
    );
}

#[test]
fn test_config_accepts_legacy_credential_names() {
    let config = config_from(&[
        ("SPOTIFY_CLIENT_ID", "legacy-id"),
        ("SPOTIFY_CLIENT_SECRET", "legacy-secret"),
    ])
    .unwrap();

    assert_eq!(config.client_id, "legacy-id");
    assert_eq!(config.client_secret, "legacy-secret");
}

#[test]
fn test_config_rejects_invalid_values() {
    let err = config_from(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
        ("SPOTIFY_API_TIMEOUT_SECS", "soon"),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "SPOTIFY_API_TIMEOUT_SECS",
            ..
        }
    ));

    let err = config_from(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
        ("SPOTIFY_API_FANOUT_LIMIT", "0"),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "SPOTIFY_API_FANOUT_LIMIT",
            ..
        }
    ));
}

#[test]
fn test_config_trims_api_url() {
    let config = config_from(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
        ("SPOTIFY_API_URL", "http://127.0.0.1:9999/"),
    ])
    .unwrap();

    assert_eq!(config.api_url, "http://127.0.0.1:9999");
}
