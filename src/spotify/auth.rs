use chrono::Utc;
use reqwest::{Client, header};

use crate::{
    config::Config,
    spotify::SpotifyError,
    types::{Credential, GrantFlow, TokenResponse},
    utils,
};

/// Obtains an app-only token through the client-credentials grant.
///
/// The token only grants access to public catalog data. Authentication is the
/// HTTP Basic header built from the configured client id and secret.
///
/// # Errors
///
/// - [`SpotifyError::Network`] when the token endpoint cannot be reached
/// - [`SpotifyError::Upstream`] when the accounts service rejects the request
/// - [`SpotifyError::UnexpectedShape`] when the body carries no `access_token`
pub async fn client_credentials(http: &Client, config: &Config) -> Result<Credential, SpotifyError> {
    let res = http
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    parse_token_response(res, GrantFlow::ClientCredentials).await
}

/// Exchanges an authorization code received on the callback for a user token.
///
/// Client id and secret travel in the form body together with the code and
/// the redirect URI that was used for the authorize request.
///
/// # Errors
///
/// Same as [`client_credentials`]. An invalid or already used code shows up
/// as [`SpotifyError::Upstream`] with status 400 and `invalid_grant`.
pub async fn exchange_code(
    http: &Client,
    config: &Config,
    code: &str,
) -> Result<Credential, SpotifyError> {
    let res = http
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .send()
        .await?;

    parse_token_response(res, GrantFlow::AuthorizationCode).await
}

async fn parse_token_response(
    res: reqwest::Response,
    flow: GrantFlow,
) -> Result<Credential, SpotifyError> {
    let status = res.status();
    let body = res.text().await?;

    let token: TokenResponse = match serde_json::from_str(&body) {
        Ok(token) => token,
        Err(_) if !status.is_success() => {
            return Err(SpotifyError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }
        Err(e) => return Err(SpotifyError::UnexpectedShape(e.to_string())),
    };

    if let Some(error) = token.error {
        return Err(SpotifyError::Upstream {
            status: if status.is_success() { 400 } else { status.as_u16() },
            message: token.error_description.unwrap_or(error),
        });
    }
    if !status.is_success() {
        return Err(SpotifyError::Upstream {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("token request failed").to_string(),
        });
    }

    let access_token = token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SpotifyError::UnexpectedShape("missing access_token".to_string()))?;

    Ok(Credential {
        access_token,
        flow,
        expires_in: token.expires_in,
        scope: token.scope,
        obtained_at: Utc::now(),
    })
}
