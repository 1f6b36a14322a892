use serde_json::json;
use spoxy::config::Config;
use spoxy::spotify::{SpotifyError, auth};
use spoxy::types::GrantFlow;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

// Helper function to point the token endpoint at a stub
fn config_for(spotify: &MockServer) -> Config {
    let token_url = format!("{}/api/token", spotify.uri());
    Config::from_lookup(|name| match name {
        "SPOTIFY_API_AUTH_CLIENT_ID" => Some("id".to_string()),
        "SPOTIFY_API_AUTH_CLIENT_SECRET" => Some("secret".to_string()),
        "SPOTIFY_API_TOKEN_URL" => Some(token_url.clone()),
        _ => None,
    })
    .unwrap()
}

#[tokio::test]
async fn test_client_credentials_authenticates_with_basic_header() {
    let spotify = MockServer::start().await;
    let config = config_for(&spotify);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cc",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&spotify)
        .await;

    let credential = auth::client_credentials(&reqwest::Client::new(), &config)
        .await
        .unwrap();

    assert_eq!(credential.access_token, "cc");
    assert_eq!(credential.flow, GrantFlow::ClientCredentials);
    assert_eq!(credential.scope, None);
    let expires_at = credential.expires_at().unwrap();
    assert_eq!((expires_at - credential.obtained_at).num_seconds(), 3600);
}

#[tokio::test]
async fn test_client_credentials_rejected() {
    let spotify = MockServer::start().await;
    let config = config_for(&spotify);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client"
        })))
        .mount(&spotify)
        .await;

    let err = auth::client_credentials(&reqwest::Client::new(), &config)
        .await
        .unwrap_err();

    match err {
        SpotifyError::Upstream { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid client");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_client_credentials_without_access_token() {
    let spotify = MockServer::start().await;
    let config = config_for(&spotify);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(&spotify)
        .await;

    let err = auth::client_credentials(&reqwest::Client::new(), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, SpotifyError::UnexpectedShape(_)), "{err:?}");
}

#[tokio::test]
async fn test_exchange_code_keeps_granted_scope() {
    let spotify = MockServer::start().await;
    let config = config_for(&spotify);

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "expires_in": 3600,
            "scope": "user-library-read"
        })))
        .expect(1)
        .mount(&spotify)
        .await;

    let credential = auth::exchange_code(&reqwest::Client::new(), &config, "abc")
        .await
        .unwrap();

    assert_eq!(credential.access_token, "user-token");
    assert_eq!(credential.flow, GrantFlow::AuthorizationCode);
    assert_eq!(credential.scope.as_deref(), Some("user-library-read"));
}
