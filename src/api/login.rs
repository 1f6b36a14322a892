use axum::{
    Extension,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    api::{ApiError, AppState},
    management::PendingLogin,
    utils,
};

/// Redirects the browser to Spotify's consent page with a `302 Found`.
///
/// Every login gets a fresh server-generated session id and `state`; the
/// callback only completes a login it can match to both. A session that is
/// already logged in is recorded as `previous` and retired on completion.
pub async fn login(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let previous = match utils::session_id_from_headers(&headers) {
        Some(id) => state.sessions.credential(&id).await.map(|_| id),
        None => None,
    };
    let session_id = utils::generate_session_id();
    let login_state = utils::generate_login_state();

    let authorize_url = utils::build_authorize_url(&state.config, &login_state)
        .map_err(|e| ApiError::Internal(format!("authorize URL: {e}")))?;

    state
        .sessions
        .begin_login(
            &session_id,
            PendingLogin {
                state: login_state,
                previous,
            },
        )
        .await;

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, authorize_url.to_string()),
            (header::SET_COOKIE, utils::session_cookie(&session_id)),
        ],
    )
        .into_response())
}

pub async fn logout(Extension(state): Extension<AppState>, headers: HeaderMap) -> &'static str {
    if let Some(session_id) = utils::session_id_from_headers(&headers) {
        state.sessions.remove(&session_id).await;
    }
    "Logged out."
}
