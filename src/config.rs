//! Configuration management for the Spotify statistics dashboard.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings, and base-URL
//! resolution for redirect responses.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (provider endpoint URLs only)
//!
//! Credentials are deliberately split from the rest: request handlers must never
//! panic on missing credentials, so they go through [`OAuthConfig::from_env`] and
//! surface a configuration error to the user instead.

use dotenv;
use std::{env, path::PathBuf};

/// Default Spotify authorization endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
/// Default Spotify token exchange endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
/// Default Spotify Web API base URL.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Confidential OAuth client settings, resolved as a unit.
///
/// The login and callback handlers need all three values before they may touch
/// the network; a missing value aborts the flow with a configuration error
/// rather than a panic.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl OAuthConfig {
    /// Resolves the client credentials and redirect URI from the environment.
    ///
    /// # Errors
    ///
    /// Returns the name of the first missing environment variable so the
    /// failure can be logged server-side. The returned message is never sent
    /// to the browser verbatim.
    pub fn from_env() -> Result<Self, String> {
        let client_id = env::var("SPOTIFY_API_AUTH_CLIENT_ID")
            .map_err(|_| "SPOTIFY_API_AUTH_CLIENT_ID is not set".to_string())?;
        let client_secret = env::var("SPOTIFY_API_AUTH_CLIENT_SECRET")
            .map_err(|_| "SPOTIFY_API_AUTH_CLIENT_SECRET is not set".to_string())?;
        let redirect_uri = env::var("SPOTIFY_API_REDIRECT_URI")
            .map_err(|_| "SPOTIFY_API_REDIRECT_URI is not set".to_string())?;

        Ok(OAuthConfig {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `spotistats/.env` first, creating the directory structure if needed, and
/// falls back to a `.env` in the working directory. A missing file is not an
/// error: all values may equally be provided through the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotistats/.env`
/// - macOS: `~/Library/Application Support/spotistats/.env`
/// - Windows: `%LOCALAPPDATA%/spotistats/.env`
pub async fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotistats/.env");
    if let Some(parent) = path.parent() {
        let _ = async_fs::create_dir_all(parent).await;
    }

    if path.is_file() {
        let _ = dotenv::from_path(path);
    } else {
        let _ = dotenv::dotenv();
    }
}

/// Returns the server address for the dashboard HTTP server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies
/// the address and port where the HTTP server should bind.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_API_AUTH_URL` environment variable, falling back to
/// the canonical Spotify authorization endpoint. This is where users are
/// redirected to grant permissions to the application.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable, falling back to
/// the canonical Spotify token endpoint. Used for exchanging authorization
/// codes for access tokens in the final step of the flow.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable, falling back to the
/// canonical Spotify Web API base. Used for all API operations after
/// authentication.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns true when the server runs in production mode.
///
/// Controlled by the `APP_ENV` environment variable; any value other than
/// `production` counts as development.
pub fn is_production() -> bool {
    env::var("APP_ENV").is_ok_and(|v| v == "production")
}

/// Returns the externally visible base URL configured for production.
///
/// Retrieves the `PUBLIC_BASE_URL` environment variable. Only consulted when
/// [`is_production`] is true; development derives the base URL from the
/// request host instead.
pub fn public_base_url() -> Option<String> {
    env::var("PUBLIC_BASE_URL").ok()
}
