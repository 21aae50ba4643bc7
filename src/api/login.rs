use axum::{
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    api::{error_redirect, found},
    config::OAuthConfig,
    info, session,
    spotify::auth,
    utils, warning,
};

/// Initiates the authorization-code flow.
///
/// Generates a fresh CSRF state, persists it in a short-lived cookie, and
/// redirects the browser to the provider's consent dialog. With incomplete
/// client configuration the flow aborts before any cookie is set or any
/// navigation to the provider happens.
pub async fn login(headers: HeaderMap, jar: CookieJar) -> Response {
    let base = utils::base_url(&headers);

    let cfg = match OAuthConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warning!("Missing Spotify configuration: {}", e);
            return error_redirect(&base, "Server configuration error");
        }
    };

    let state = utils::generate_state_token();
    let jar = jar.add(session::state_cookie(&state, utils::cookie_secure(&headers)));
    let url = auth::authorize_url(&cfg, &state);

    info!("Redirecting browser to the Spotify consent dialog");
    (jar, found(&url)).into_response()
}
