use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use thiserror::Error;

use crate::{config, config::OAuthConfig, types::TokenResponse};

/// Permission scopes requested at login. Fixed set: profile, email, top items,
/// listening history, and playback state.
pub const SPOTIFY_SCOPES: &str =
    "user-read-private user-read-email user-top-read user-read-recently-played user-read-playback-state";

/// Failures of the server-to-server token exchange.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint answered {status}")]
    Status { status: u16, body: String },
}

/// Builds the provider authorization URL for a login attempt.
///
/// Encodes the configured client id and redirect URI, the fixed scope set,
/// the caller's CSRF state, and `show_dialog=true` so the consent dialog is
/// always shown.
pub fn authorize_url(cfg: &OAuthConfig, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}&show_dialog=true",
        auth_url = config::spotify_apiauth_url(),
        client_id = cfg.client_id,
        redirect_uri = urlencoding::encode(&cfg.redirect_uri),
        scope = urlencoding::encode(SPOTIFY_SCOPES),
        state = state,
    )
}

/// Exchanges an authorization code for a token payload.
///
/// Issues a single form-urlencoded POST to the token endpoint with
/// `grant_type=authorization_code`, authenticated via HTTP Basic credentials
/// built from the application's client id and secret.
///
/// # Errors
///
/// Returns [`ExchangeError::Status`] with the upstream status and body when
/// the endpoint answers non-success, and [`ExchangeError::Transport`] when the
/// request cannot be performed or the body cannot be decoded. The returned
/// payload is not validated here: the callback handler checks for the access
/// token so it can surface a distinct message.
pub async fn exchange_code(cfg: &OAuthConfig, code: &str) -> Result<TokenResponse, ExchangeError> {
    let basic = STANDARD.encode(format!("{}:{}", cfg.client_id, cfg.client_secret));

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &cfg.redirect_uri),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ExchangeError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let tokens: TokenResponse = res.json().await?;
    Ok(tokens)
}
