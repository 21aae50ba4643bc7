use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::{error::ApiError, session, session::Session, spotify::client, warning};

/// Fetches the authenticated user's profile from Spotify.
///
/// When Spotify rejects the token with 401 the stale access cookie is cleared
/// along with the error response, so the next page load sends the user back
/// through login instead of looping on a dead session.
pub async fn me(jar: CookieJar) -> Response {
    let session = match Session::from_jar(&jar) {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };

    match client::get_profile(&session).await {
        Ok(profile) => Json(profile).into_response(),
        Err(ApiError::Upstream { status: 401, .. }) => {
            warning!("Spotify rejected the access token; clearing session cookie");
            let jar = jar.add(session::clear_access_cookie());
            (
                StatusCode::UNAUTHORIZED,
                jar,
                Json(json!({ "error": "Invalid or expired token" })),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
