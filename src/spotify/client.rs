use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::{ApiError, ApiResult},
    session::Session,
    warning,
};

/// Performs an authenticated GET against the Spotify Web API.
///
/// `endpoint` is the path (plus query) below the API base URL, e.g.
/// `me/top/tracks?limit=50`. The session's access token is sent as a Bearer
/// credential. No retry and no token refresh: an expired token surfaces as an
/// upstream 401 to the caller.
///
/// # Errors
///
/// - [`ApiError::Upstream`] with the upstream status for non-success answers;
///   the response body is logged server-side and not propagated verbatim
/// - [`ApiError::Transport`] when the request cannot be performed or decoded
pub async fn fetch_json(session: &Session, endpoint: &str) -> ApiResult<Value> {
    let url = format!("{}/{}", config::spotify_apiurl(), endpoint);

    let client = Client::new();
    let res = client
        .get(&url)
        .bearer_auth(&session.access_token)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        warning!("Spotify API error on {}: {} - {}", endpoint, status, body);
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message: format!("Spotify API error: {}", status.as_u16()),
        });
    }

    Ok(res.json().await?)
}

/// Fetches the authenticated user's profile.
pub async fn get_profile(session: &Session) -> ApiResult<Value> {
    fetch_json(session, "me").await
}

/// Fetches the user's top tracks for a time range.
pub async fn get_top_tracks(session: &Session, limit: u32, time_range: &str) -> ApiResult<Value> {
    fetch_json(
        session,
        &format!("me/top/tracks?limit={}&time_range={}", limit, time_range),
    )
    .await
}

/// Fetches the user's top artists for a time range.
pub async fn get_top_artists(session: &Session, limit: u32, time_range: &str) -> ApiResult<Value> {
    fetch_json(
        session,
        &format!("me/top/artists?limit={}&time_range={}", limit, time_range),
    )
    .await
}

/// Fetches the user's recently played tracks, most recent first.
pub async fn get_recently_played(session: &Session, limit: u32) -> ApiResult<Value> {
    fetch_json(
        session,
        &format!("me/player/recently-played?limit={}", limit),
    )
    .await
}
