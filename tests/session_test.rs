use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::{CookieJar, SameSite};
use time::Duration;

use spotistats::error::ApiError;
use spotistats::session::*;

fn jar_with_cookie_header(value: &str) -> CookieJar {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, value.parse().unwrap());
    CookieJar::from_headers(&headers)
}

#[test]
fn test_access_cookie_attributes() {
    let cookie = access_cookie("T", 3600, false);

    assert_eq!(cookie.name(), "spotify_access_token");
    assert_eq!(cookie.value(), "T");
    assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));

    // Client scripts read this cookie, so it must not be httpOnly
    assert_eq!(cookie.http_only(), Some(false));
}

#[test]
fn test_access_cookie_secure_in_production() {
    let cookie = access_cookie("T", 3600, true);
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn test_refresh_cookie_fixed_thirty_day_lifetime() {
    // The refresh cookie lifetime never follows expires_in
    let cookie = refresh_cookie("R", true);

    assert_eq!(cookie.name(), "spotify_refresh_token");
    assert_eq!(cookie.value(), "R");
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn test_state_cookie_attributes() {
    let cookie = state_cookie("abc123", false);

    assert_eq!(cookie.name(), "spotify_auth_state");
    assert_eq!(cookie.value(), "abc123");
    assert_eq!(cookie.max_age(), Some(Duration::seconds(600)));
    assert_eq!(cookie.http_only(), Some(true));
}

#[test]
fn test_clear_cookies_expire_immediately() {
    let access = clear_access_cookie();
    assert_eq!(access.name(), "spotify_access_token");
    assert_eq!(access.value(), "");
    assert_eq!(access.max_age(), Some(Duration::ZERO));

    let state = clear_state_cookie();
    assert_eq!(state.name(), "spotify_auth_state");
    assert_eq!(state.value(), "");
    assert_eq!(state.max_age(), Some(Duration::ZERO));
}

#[test]
fn test_session_from_jar_with_access_token() {
    let jar = jar_with_cookie_header("spotify_access_token=BQCtoken");

    let session = Session::from_jar(&jar).expect("session should decode");
    assert_eq!(session.access_token, "BQCtoken");
}

#[test]
fn test_session_from_jar_without_cookie_is_unauthenticated() {
    let jar = CookieJar::from_headers(&HeaderMap::new());

    let err = Session::from_jar(&jar).expect_err("no cookie must not authenticate");
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[test]
fn test_session_from_jar_ignores_other_cookies() {
    let jar = jar_with_cookie_header("spotify_refresh_token=R; spotify_auth_state=abc");

    let err = Session::from_jar(&jar).expect_err("refresh token alone is not a session");
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[test]
fn test_session_from_jar_rejects_empty_value() {
    let jar = jar_with_cookie_header("spotify_access_token=");

    let err = Session::from_jar(&jar).expect_err("cleared cookie is not a session");
    assert!(matches!(err, ApiError::Unauthenticated));
}
