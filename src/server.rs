use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, config, error, info, pages};

/// Builds the application router. Kept separate from the listener setup so
/// tests can drive the routes directly.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/dashboard", get(pages::dashboard))
        .route("/error", get(pages::error_page))
        .route("/health", get(api::health))
        .route("/api/login", get(api::login))
        .route("/api/callback", get(api::callback))
        .route("/api/me", get(api::me))
        .route("/api/me/top/tracks", get(api::top_tracks))
        .route("/api/me/top/artists", get(api::top_artists))
        .route("/api/me/top/tracks/audio-features", get(api::audio_features))
        .route("/api/me/player/recently-played", get(api::recently_played))
        .route("/api/me/most-recent-song", get(api::most_recent_song))
        .route("/api/me/secret-song", get(api::secret_song))
}

pub async fn start_api_server() {
    let app = router();

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Serving the dashboard on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
