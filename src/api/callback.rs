use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    api::{ApiError, AppState},
    info,
    spotify::auth,
    success, utils, warning,
};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Authentication successful! You can now make API requests.";
pub const LOGIN_FAILURE_MESSAGE: &str = "Error retrieving token.";

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// Completes the authorization-code flow.
///
/// The request must carry the session cookie issued by `/login` and the
/// `state` sent with that login; each login completes once. The credential
/// is stored under that session, and the browser's previous logged-in
/// session (if any) is retired, so only the latest login stays active.
pub async fn callback(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Response {
    if let Some(error) = params.error {
        warning!("Authorization was not granted: {}", error);
        return (
            StatusCode::BAD_REQUEST,
            format!("Authorization denied: {error}"),
        )
            .into_response();
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return ApiError::MissingParameter("Missing authorization code.").into_response();
    };

    let Some(session_id) = utils::session_id_from_headers(&headers) else {
        return ApiError::InvalidLoginState.into_response();
    };
    let pending = match state.sessions.take_login(&session_id).await {
        Some(pending) if params.state.as_deref() == Some(pending.state.as_str()) => pending,
        _ => return ApiError::InvalidLoginState.into_response(),
    };

    match auth::exchange_code(state.spotify.http(), &state.config, &code).await {
        Ok(credential) => {
            if let Some(scope) = &credential.scope {
                info!("Granted scope: {}", scope);
            }
            state.sessions.store(&session_id, credential).await;
            if let Some(previous) = pending.previous {
                if state.sessions.remove(&previous).await.is_some() {
                    info!("Replaced the credential of an existing session");
                }
            }
            success!("Authentication successful.");
            (
                StatusCode::OK,
                [(header::SET_COOKIE, utils::session_cookie(&session_id))],
                LOGIN_SUCCESS_MESSAGE,
            )
                .into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, LOGIN_FAILURE_MESSAGE).into_response()
        }
    }
}
