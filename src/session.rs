//! Session extraction and cookie construction.
//!
//! The browser's cookie jar is only the wire encoding of a session: handlers
//! build an explicit [`Session`] from the request jar and pass it down to the
//! Spotify client. Cookie names are part of the wire contract and must not
//! change.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::error::ApiError;

/// Cookie name for the access token. Readable by client scripts.
pub const ACCESS_COOKIE: &str = "spotify_access_token";
/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "spotify_refresh_token";
/// Cookie name for the CSRF state issued at login initiation.
pub const STATE_COOKIE: &str = "spotify_auth_state";

/// Access-token lifetime applied when the provider omits `expires_in`.
pub const DEFAULT_ACCESS_MAX_AGE: i64 = 60 * 60 * 24 * 7;
/// Fixed refresh-token cookie lifetime, independent of `expires_in`.
pub const REFRESH_MAX_AGE: i64 = 60 * 60 * 24 * 30;
/// The state cookie only has to survive one trip through the provider.
pub const STATE_MAX_AGE: i64 = 60 * 10;

/// An authenticated browser session, decoded from the cookie jar.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
}

impl Session {
    /// Extracts the session from the request cookie jar.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] when the access-token cookie is
    /// absent, so callers fail before attempting any upstream request.
    pub fn from_jar(jar: &CookieJar) -> Result<Self, ApiError> {
        let access_token = jar
            .get(ACCESS_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Session { access_token })
    }
}

/// Build the access-token cookie. Not httpOnly: client scripts read it.
pub fn access_cookie(token: &str, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_COOKIE, token.to_string()))
        .http_only(false)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build the httpOnly refresh-token cookie with its fixed 30-day lifetime.
pub fn refresh_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(REFRESH_MAX_AGE))
        .build()
}

/// Build the short-lived httpOnly cookie carrying the CSRF state.
pub fn state_cookie(state: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, state.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(STATE_MAX_AGE))
        .build()
}

/// Build an expired cookie that clears the access token.
pub fn clear_access_cookie() -> Cookie<'static> {
    Cookie::build((ACCESS_COOKIE, String::new()))
        .http_only(false)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Build an expired cookie that consumes the CSRF state.
pub fn clear_state_cookie() -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, String::new()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
