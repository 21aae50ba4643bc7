use axum::{Json, extract::Query};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{Value, json};

use crate::{
    error::{ApiError, ApiResult},
    session::Session,
    spotify::client,
    types::RecentlyPlayedQuery,
};

const DEFAULT_LIMIT: u32 = 50;

/// Proxies the user's recently played tracks, most recent first.
pub async fn recently_played(
    Query(q): Query<RecentlyPlayedQuery>,
    jar: CookieJar,
) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;
    let data = client::get_recently_played(&session, q.limit.unwrap_or(DEFAULT_LIMIT)).await?;
    Ok(Json(data))
}

/// Returns the single most recently played track as a recap card payload.
pub async fn most_recent_song(jar: CookieJar) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;

    let data = client::get_recently_played(&session, 1).await?;
    let item = data
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No recently played tracks found".to_string()))?;

    Ok(Json(json!({
        "track": item.get("track").cloned().unwrap_or(Value::Null),
        "playedAt": item.get("played_at").cloned().unwrap_or(Value::Null),
        "message": "Your most recent Spotify jam!"
    })))
}
