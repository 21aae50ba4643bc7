use axum::{
    extract::Query,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    api::{error_redirect, found},
    config::OAuthConfig,
    info, session,
    session::{DEFAULT_ACCESS_MAX_AGE, STATE_COOKIE},
    spotify::auth::{self, ExchangeError},
    success,
    types::CallbackParams,
    utils, warning,
};

/// Handles the provider's redirect back from the consent dialog.
///
/// Terminal on every path: provider errors, a missing code, a state mismatch,
/// missing configuration, and exchange failures all redirect to the error page
/// with a human-readable message, while a valid token payload establishes the
/// cookie session and redirects into the dashboard. The response is a 302 in
/// every branch; no content body is ever rendered here.
///
/// The state comparison happens before any network call, so a forged code with
/// attacker-controlled state is rejected without ever reaching the token
/// endpoint.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let base = utils::base_url(&headers);

    // Provider reported an error instead of a code
    if let Some(err) = params.error {
        warning!("Spotify auth error: {}", err);
        return error_redirect(&base, &format!("Spotify authentication failed: {}", err));
    }

    let Some(code) = params.code else {
        warning!("No code provided in callback");
        return error_redirect(&base, "No authorization code received from Spotify");
    };

    // CSRF check: the state issued at login must round-trip unchanged. Rejects
    // before the network exchange.
    let stored_state = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    match (&stored_state, &params.state) {
        (Some(stored), Some(returned)) if stored == returned => {}
        _ => {
            warning!("Authorization state mismatch; rejecting callback");
            return error_redirect(&base, "Authorization state mismatch");
        }
    }
    // The state is consumed by its matching callback, success or not
    let jar = jar.add(session::clear_state_cookie());

    let cfg = match OAuthConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warning!("Missing Spotify configuration: {}", e);
            return (jar, error_redirect(&base, "Server configuration error")).into_response();
        }
    };

    info!("Exchanging authorization code for tokens...");
    let tokens = match auth::exchange_code(&cfg, &code).await {
        Ok(tokens) => tokens,
        Err(ExchangeError::Status { status, body }) => {
            warning!("Token exchange failed with status {}: {}", status, body);
            return (
                jar,
                error_redirect(&base, "Failed to exchange authorization code for tokens"),
            )
                .into_response();
        }
        Err(ExchangeError::Transport(e)) => {
            warning!("Token exchange request failed: {}", e);
            return (
                jar,
                error_redirect(&base, "Failed to exchange authorization code for tokens"),
            )
                .into_response();
        }
    };

    let Some(access_token) = tokens.access_token else {
        warning!("No access token in token endpoint response");
        return (
            jar,
            error_redirect(&base, "No access token received from Spotify"),
        )
            .into_response();
    };

    // Session establishment: the cookie pair becomes the only record of the
    // tokens. Access cookie lives for expires_in (or a week), the refresh
    // cookie for a fixed 30 days.
    let secure = utils::cookie_secure(&headers);
    let max_age = tokens.expires_in.unwrap_or(DEFAULT_ACCESS_MAX_AGE);
    let mut jar = jar.add(session::access_cookie(&access_token, max_age, secure));

    if let Some(refresh_token) = tokens.refresh_token {
        jar = jar.add(session::refresh_cookie(&refresh_token, secure));
    } else {
        info!("No refresh token provided by Spotify");
    }

    success!("Session established; redirecting to the dashboard");
    (jar, found(&format!("{}/dashboard", base))).into_response()
}
