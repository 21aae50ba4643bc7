use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopItemsQuery {
    pub limit: Option<u32>,
    pub time_range: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedQuery {
    pub limit: Option<u32>,
}

/// One track's audio-feature vector as returned by the provider. Individual
/// fields may be missing even when the object itself is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: Option<String>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub loudness: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
}

/// Batch response from the audio-features endpoint. Unknown track ids come
/// back as `null` entries, which the aggregation must not count.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Mean of each audio-feature dimension across the valid tracks of a batch,
/// with loudness rescaled into [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureAverages {
    pub energy: f64,
    pub danceability: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
}
