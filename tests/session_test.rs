use chrono::Utc;
use spoxy::management::{PendingLogin, SessionManager};
use spoxy::types::{Credential, GrantFlow};

// Helper function to create a test credential
fn credential(token: &str) -> Credential {
    Credential {
        access_token: token.to_string(),
        flow: GrantFlow::AuthorizationCode,
        expires_in: Some(3600),
        scope: Some("user-library-read".to_string()),
        obtained_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_unknown_session_has_no_credential() {
    let sessions = SessionManager::new();

    assert!(sessions.credential("missing").await.is_none());
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_store_is_last_write_wins() {
    let sessions = SessionManager::new();

    assert!(sessions.store("s1", credential("first")).await.is_none());
    let replaced = sessions.store("s1", credential("second")).await;

    assert_eq!(replaced.map(|c| c.access_token).as_deref(), Some("first"));
    assert_eq!(
        sessions.credential("s1").await.map(|c| c.access_token).as_deref(),
        Some("second")
    );
    assert_eq!(sessions.len().await, 1);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let sessions = SessionManager::new();
    sessions.store("alice", credential("token-a")).await;
    sessions.store("bob", credential("token-b")).await;

    assert_eq!(
        sessions.credential("alice").await.map(|c| c.access_token).as_deref(),
        Some("token-a")
    );
    assert_eq!(
        sessions.credential("bob").await.map(|c| c.access_token).as_deref(),
        Some("token-b")
    );
}

#[tokio::test]
async fn test_clones_share_state() {
    let sessions = SessionManager::new();
    let handle = sessions.clone();

    handle.store("s1", credential("token")).await;
    assert!(sessions.credential("s1").await.is_some());

    sessions.remove("s1").await;
    assert!(handle.credential("s1").await.is_none());
}

#[tokio::test]
async fn test_pending_login_completes_once() {
    let sessions = SessionManager::new();
    sessions
        .begin_login(
            "s1",
            PendingLogin {
                state: "first".to_string(),
                previous: None,
            },
        )
        .await;
    sessions
        .begin_login(
            "s1",
            PendingLogin {
                state: "second".to_string(),
                previous: Some("old".to_string()),
            },
        )
        .await;

    let pending = sessions.take_login("s1").await.unwrap();
    assert_eq!(pending.state, "second");
    assert_eq!(pending.previous.as_deref(), Some("old"));
    assert!(sessions.take_login("s1").await.is_none());

    // pending logins are not sessions
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_remove_discards_pending_login() {
    let sessions = SessionManager::new();
    sessions
        .begin_login(
            "s1",
            PendingLogin {
                state: "abc".to_string(),
                previous: None,
            },
        )
        .await;

    sessions.remove("s1").await;
    assert!(sessions.take_login("s1").await.is_none());
}

#[test]
fn test_credential_expiry() {
    let cred = credential("token");
    let expires_at = cred.expires_at().unwrap();

    assert_eq!((expires_at - cred.obtained_at).num_seconds(), 3600);

    let no_expiry = Credential {
        expires_in: None,
        ..cred
    };
    assert!(no_expiry.expires_at().is_none());
}
