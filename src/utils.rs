use axum::http::{HeaderMap, header};
use rand::{Rng, distr::Alphanumeric};

use crate::{
    config,
    types::{AudioFeatures, FeatureAverages},
};

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Loopback and tunnel hosts are served over plain HTTP, so their cookies must
/// not carry the `Secure` attribute.
pub fn is_local_host(host: &str) -> bool {
    host.contains("localhost") || host.starts_with("127.0.0.1") || host.contains("loca.lt")
}

/// Resolves the base URL used for redirect responses.
///
/// In production the configured public base URL wins. Otherwise the base is
/// derived from the request `Host` header, falling back to relative redirects
/// when no host is available.
pub fn base_url(headers: &HeaderMap) -> String {
    if config::is_production() {
        if let Some(base) = config::public_base_url() {
            return base.trim_end_matches('/').to_string();
        }
    }

    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => {
            let protocol = if is_local_host(host) { "http" } else { "https" };
            format!("{}://{}", protocol, host)
        }
        None => String::new(),
    }
}

/// Whether session cookies for this request must carry the `Secure`
/// attribute. Computed from the effective request host, never from a static
/// flag, so local development over plain HTTP still works while production
/// forces encrypted transport.
pub fn cookie_secure(headers: &HeaderMap) -> bool {
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => !is_local_host(host),
        None => false,
    }
}

/// Rescales a loudness average from its decibel domain of roughly [-60, 0]
/// into [0, 1], clamping out-of-range input.
pub fn normalize_loudness(db: f64) -> f64 {
    ((db + 60.0) / 60.0).clamp(0.0, 1.0)
}

/// Averages each feature dimension across a batch of per-track vectors.
///
/// The denominator counts only tracks whose feature object is present; a
/// present object with missing fields still counts, with the missing fields
/// contributing zero. With no valid tracks at all the result is a defined
/// zero vector (the loudness rescale is skipped as well, since it would map
/// an average of zero to 1.0).
pub fn average_features(features: &[Option<AudioFeatures>]) -> FeatureAverages {
    let mut avg = FeatureAverages::default();
    let mut valid_tracks = 0u32;

    for f in features.iter().flatten() {
        avg.energy += f.energy.unwrap_or(0.0);
        avg.danceability += f.danceability.unwrap_or(0.0);
        avg.loudness += f.loudness.unwrap_or(0.0);
        avg.speechiness += f.speechiness.unwrap_or(0.0);
        avg.acousticness += f.acousticness.unwrap_or(0.0);
        avg.instrumentalness += f.instrumentalness.unwrap_or(0.0);
        avg.liveness += f.liveness.unwrap_or(0.0);
        avg.valence += f.valence.unwrap_or(0.0);
        valid_tracks += 1;
    }

    if valid_tracks == 0 {
        return avg;
    }

    let n = valid_tracks as f64;
    avg.energy /= n;
    avg.danceability /= n;
    avg.loudness /= n;
    avg.speechiness /= n;
    avg.acousticness /= n;
    avg.instrumentalness /= n;
    avg.liveness /= n;
    avg.valence /= n;

    avg.loudness = normalize_loudness(avg.loudness);
    avg
}

/// Number of valid (non-null) feature objects in a batch, as reported back to
/// the dashboard alongside the averages.
pub fn count_valid_features(features: &[Option<AudioFeatures>]) -> usize {
    features.iter().flatten().count()
}
