use crate::{config::Config, error, info, spotify::auth, success, utils};

/// Checks the configured client id and secret by requesting an app token.
pub async fn token(config: &Config) {
    let http = match config.http_client() {
        Ok(http) => http,
        Err(e) => error!("Cannot create HTTP client: {}", e),
    };

    info!("Client ID: {}", config.client_id);

    let pb = utils::spinner("Requesting client-credentials token...");
    let result = auth::client_credentials(&http, config).await;
    pb.finish_and_clear();

    match result {
        Ok(credential) => {
            success!(
                "Access token acquired via {}: {}",
                credential.flow,
                utils::mask_secret(&credential.access_token)
            );
            if let Some(expires_at) = credential.expires_at() {
                info!("Expires at {}", expires_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        Err(e) => error!("Error getting access token: {}", e),
    }
}
