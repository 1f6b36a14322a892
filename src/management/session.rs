use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::types::Credential;

/// A login started on `/login` and not yet completed on `/callback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    /// OAuth `state` sent to the authorize page.
    pub state: String,
    /// Logged-in session the browser held before, retired once the new
    /// login completes.
    pub previous: Option<String>,
}

/// Credentials of every logged-in browser session, keyed by session id.
///
/// Cloning the manager clones the handle, not the map. Each session has a
/// single credential: a later login in the same session replaces it.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<String, Credential>>>,
    pending: Arc<RwLock<HashMap<String, PendingLogin>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `credential` for `session_id`, returning the one it replaced.
    pub async fn store(&self, session_id: &str, credential: Credential) -> Option<Credential> {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), credential)
    }

    pub async fn credential(&self, session_id: &str) -> Option<Credential> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn remove(&self, session_id: &str) -> Option<Credential> {
        self.pending.write().await.remove(session_id);
        self.sessions.write().await.remove(session_id)
    }

    /// Records a login started by `session_id`. Starting another login in the
    /// same session discards the earlier one.
    pub async fn begin_login(&self, session_id: &str, login: PendingLogin) {
        self.pending
            .write()
            .await
            .insert(session_id.to_string(), login);
    }

    /// Removes and returns the pending login of `session_id`. A login can be
    /// completed once.
    pub async fn take_login(&self, session_id: &str) -> Option<PendingLogin> {
        self.pending.write().await.remove(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
