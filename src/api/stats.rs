use axum::{Json, extract::Query};
use axum_extra::extract::cookie::CookieJar;
use rand::Rng;
use serde_json::{Value, json};

use crate::{
    error::{ApiError, ApiResult},
    session::Session,
    spotify::{client, features},
    types::TopItemsQuery,
    utils,
};

const DEFAULT_TIME_RANGE: &str = "short_term";

/// Fun captions for the secret-song recap card.
const SECRET_SONG_MESSAGES: &[&str] = &[
    "Your secret track hiding in plain sight",
    "The hidden gem at the bottom of the list",
    "Your playlist's best kept secret",
    "The track that deserves more love",
    "Your musical dark horse",
    "The underdog of your favorites",
    "The track that's flying under the radar",
    "Your playlist's hidden treasure",
];

fn track_ids(data: &Value) -> Vec<String> {
    data.get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|t| t.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Averages the audio features of the user's top tracks.
///
/// Fetches the top tracks for the requested time range, then their feature
/// vectors in batches, and returns the mean of each of the eight dimensions.
/// The divisor counts only tracks with a non-null feature object; with no
/// tracks at all the route answers 404 instead of an empty average.
pub async fn audio_features(
    Query(q): Query<TopItemsQuery>,
    jar: CookieJar,
) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;
    let limit = q.limit.unwrap_or(20);
    let time_range = q.time_range.unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string());

    let top_tracks = client::get_top_tracks(&session, limit, &time_range).await?;
    let ids = track_ids(&top_tracks);
    if ids.is_empty() {
        return Err(ApiError::NotFound("No tracks found".to_string()));
    }

    let feature_vectors = features::get_audio_features(&session, &ids).await?;
    let averages = utils::average_features(&feature_vectors);
    let valid_tracks = utils::count_valid_features(&feature_vectors);

    Ok(Json(json!({
        "features": averages,
        "trackCount": valid_tracks,
        "timeRange": time_range,
    })))
}

/// Picks the bottom entry of the user's top-50 tracks as the "secret song".
pub async fn secret_song(Query(q): Query<TopItemsQuery>, jar: CookieJar) -> ApiResult<Json<Value>> {
    let session = Session::from_jar(&jar)?;
    let time_range = q.time_range.as_deref().unwrap_or(DEFAULT_TIME_RANGE);

    // 50 so the bottom of the list is actually obscure
    let data = client::get_top_tracks(&session, 50, time_range).await?;
    let tracks = data
        .get("items")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let Some(secret_track) = tracks.last() else {
        return Err(ApiError::NotFound("No tracks found".to_string()));
    };

    let message = SECRET_SONG_MESSAGES[rand::rng().random_range(0..SECRET_SONG_MESSAGES.len())];

    Ok(Json(json!({
        "track": secret_track,
        "message": message,
        "trackPosition": tracks.len(),
        "totalTracks": tracks.len(),
    })))
}
