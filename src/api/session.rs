use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    api::{ApiError, AppState},
    types::Credential,
    utils,
};

/// Extractor guarding every data route.
///
/// Resolves the `spoxy_session` cookie to the credential stored for it.
/// Requests without a logged-in session are rejected with
/// [`ApiError::MissingCredential`] before the handler runs, so no upstream
/// call is made for them. A present but expired token is not detected here.
#[derive(Debug, Clone)]
pub struct AuthorizedSession {
    pub credential: Credential,
}

impl AuthorizedSession {
    pub fn access_token(&self) -> &str {
        &self.credential.access_token
    }
}

impl<S> FromRequestParts<S> for AuthorizedSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app = parts
            .extensions
            .get::<AppState>()
            .cloned()
            .ok_or_else(|| ApiError::Internal("application state not installed".to_string()))?;

        let session_id =
            utils::session_id_from_headers(&parts.headers).ok_or(ApiError::MissingCredential)?;
        let credential = app
            .sessions
            .credential(&session_id)
            .await
            .ok_or(ApiError::MissingCredential)?;

        Ok(Self { credential })
    }
}
