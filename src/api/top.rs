use axum::{Json, extract::Query};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use crate::{
    error::ApiResult, session::Session, spotify::client, types::TopItemsQuery,
};

const DEFAULT_LIMIT: u32 = 50;
const DEFAULT_TIME_RANGE: &str = "short_term";

/// Proxies the user's top tracks. Upstream payload is passed through as-is.
pub async fn top_tracks(Query(q): Query<TopItemsQuery>, jar: CookieJar) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT);
    let time_range = q.time_range.as_deref().unwrap_or(DEFAULT_TIME_RANGE);

    let data = client::get_top_tracks(&session, limit, time_range).await?;
    Ok(Json(data))
}

/// Proxies the user's top artists. Upstream payload is passed through as-is.
pub async fn top_artists(Query(q): Query<TopItemsQuery>, jar: CookieJar) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT);
    let time_range = q.time_range.as_deref().unwrap_or(DEFAULT_TIME_RANGE);

    let data = client::get_top_artists(&session, limit, time_range).await?;
    Ok(Json(data))
}
