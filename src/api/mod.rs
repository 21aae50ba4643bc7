//! # API Module
//!
//! This module provides the HTTP endpoints of the dashboard server. It covers the
//! OAuth authentication flow and the authenticated read-only proxy routes the
//! dashboard UI is built on.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Initiates the authorization-code flow: issues the CSRF state,
//!   stores it in a short-lived cookie, and redirects to the provider's consent
//!   dialog.
//! - [`callback`] - Handles the provider's redirect. Exchanges the authorization
//!   code for tokens and establishes the cookie session. Every branch, success or
//!   failure, terminates in a 302 redirect.
//!
//! ### Authenticated proxy routes
//!
//! - [`me`] - Profile pass-through.
//! - [`top_tracks`] / [`top_artists`] - Top items with `limit` and `time_range`.
//! - [`recently_played`] - Listening history.
//! - [`audio_features`] - Averaged audio-feature vector over the user's top tracks.
//! - [`most_recent_song`] / [`secret_song`] - Templated recap picks.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and version.
//!
//! ## Error Handling
//!
//! Failures of the OAuth flow redirect to the error page with a human-readable
//! message; upstream error bodies are logged server-side and never leak to the
//! browser. Failures of the proxy routes answer with a JSON `{"error": ...}` body
//! and a non-2xx status, rendered inline by the UI.

mod callback;
mod health;
mod login;
mod me;
mod player;
mod stats;
mod top;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use me::me;
pub use player::{most_recent_song, recently_played};
pub use stats::{audio_features, secret_song};
pub use top::{top_artists, top_tracks};

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// A plain 302 redirect. The redirect status is part of the wire contract, so
/// this is built by hand instead of using `axum::response::Redirect` (which
/// emits 303/307).
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Redirects to the error page with a URL-encoded human-readable message.
pub(crate) fn error_redirect(base_url: &str, message: &str) -> Response {
    found(&format!(
        "{}/error?message={}",
        base_url,
        urlencoding::encode(message)
    ))
}
