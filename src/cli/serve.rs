use tokio::net::TcpListener;

use crate::{api::AppState, config::Config, error, info, server, warning};

pub async fn serve(config: Config, open_browser: bool) {
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot create HTTP client: {}", e),
    };

    let addr = state.config.server_addr;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Server running on http://{}", addr);

    if open_browser {
        match state.config.login_url() {
            Some(url) => {
                info!("Opening login page...");
                if webbrowser::open(&url).is_err() {
                    warning!(
                        "Failed to open browser. Please navigate to the following URL manually:\n{}",
                        url
                    );
                }
            }
            None => warning!("Cannot derive the login URL from the redirect URI."),
        }
    }

    if let Err(e) = server::start_api_server(listener, state).await {
        error!("Server stopped: {}", e);
    }
}
