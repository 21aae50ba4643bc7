use serde_json::from_value;

use crate::{
    error::{ApiError, ApiResult},
    session::Session,
    spotify::client,
    types::AudioFeatures,
};

/// Upstream batch limit for the audio-features endpoint.
const BATCH_LIMIT: usize = 100;

/// Fetches audio-feature vectors for a batch of track ids.
///
/// The upstream endpoint accepts at most 100 ids per call, so larger batches
/// are fetched in chunks and recombined in request order. Tracks the provider
/// does not know come back as `null` entries, which are preserved: the
/// aggregation's divisor must count only non-null feature objects.
pub async fn get_audio_features(
    session: &Session,
    track_ids: &[String],
) -> ApiResult<Vec<Option<AudioFeatures>>> {
    let mut all_features = Vec::with_capacity(track_ids.len());

    for chunk in track_ids.chunks(BATCH_LIMIT) {
        let data = client::fetch_json(
            session,
            &format!("audio-features?ids={}", chunk.join(",")),
        )
        .await?;

        let batch: Vec<Option<AudioFeatures>> = data
            .get("audio_features")
            .cloned()
            .map(from_value)
            .transpose()
            .map_err(|e| ApiError::Transport(format!("invalid audio-features payload: {}", e)))?
            .unwrap_or_default();

        all_features.extend(batch);
    }

    Ok(all_features)
}
