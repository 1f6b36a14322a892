use std::time::Duration;

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::STANDARD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;

use crate::{config::Config, types::Image};

pub const SESSION_COOKIE: &str = "spoxy_session";
const SESSION_ID_LEN: usize = 32;
const LOGIN_STATE_LEN: usize = 24;

pub type UrlParseError = <Url as std::str::FromStr>::Err;

pub fn generate_session_id() -> String {
    random_alphanumeric(SESSION_ID_LEN)
}

/// Value for the OAuth `state` parameter, echoed back on the callback.
pub fn generate_login_state() -> String {
    random_alphanumeric(LOGIN_STATE_LEN)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `Basic` authorization value for the token endpoint: base64 of `id:secret`.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Spotify authorize URL for the authorization-code flow.
pub fn build_authorize_url(config: &Config, state: &str) -> Result<Url, UrlParseError> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
            ("state", state),
        ],
    )
}

/// Session id carried in the request's `Cookie` headers, if any.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn join_names(names: &[String]) -> String {
    names.join(", ")
}

pub fn first_image_url(images: &[Image]) -> Option<String> {
    images.first().map(|image| image.url.clone())
}

/// Keeps the first and last four characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
