use axum::http::{HeaderMap, header};
use spotistats::types::AudioFeatures;
use spotistats::utils::*;

// Helper function to create a feature object with only energy set
fn energy_only(energy: f64) -> AudioFeatures {
    AudioFeatures {
        energy: Some(energy),
        ..AudioFeatures::default()
    }
}

fn headers_with_host(host: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, host.parse().unwrap());
    headers
}

#[test]
fn test_generate_state_token() {
    let state = generate_state_token();

    // Should be exactly 16 characters
    assert_eq!(state.len(), 16);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let state2 = generate_state_token();
    assert_ne!(state, state2);
}

#[test]
fn test_is_local_host() {
    assert!(is_local_host("localhost:3000"));
    assert!(is_local_host("127.0.0.1:8080"));
    assert!(is_local_host("myapp.loca.lt"));

    assert!(!is_local_host("myapp.example.com"));
    assert!(!is_local_host("spotistats.example.com:443"));
}

#[test]
fn test_cookie_secure_by_host() {
    assert!(!cookie_secure(&headers_with_host("localhost:3000")));
    assert!(!cookie_secure(&headers_with_host("127.0.0.1:3000")));
    assert!(cookie_secure(&headers_with_host("myapp.example.com")));

    // No host header at all: plain-HTTP test clients must still work
    assert!(!cookie_secure(&HeaderMap::new()));
}

#[test]
fn test_normalize_loudness_endpoints() {
    assert_eq!(normalize_loudness(-60.0), 0.0);
    assert_eq!(normalize_loudness(0.0), 1.0);
    assert_eq!(normalize_loudness(-30.0), 0.5);
}

#[test]
fn test_normalize_loudness_clamps_out_of_range() {
    assert_eq!(normalize_loudness(-90.0), 0.0);
    assert_eq!(normalize_loudness(30.0), 1.0);
}

#[test]
fn test_average_features_skips_null_objects_in_denominator() {
    // Third track has no feature object at all: it must not count towards
    // the divisor, so the mean is (0.5 + 0.7) / 2.
    let features = vec![Some(energy_only(0.5)), Some(energy_only(0.7)), None];

    let avg = average_features(&features);
    assert!((avg.energy - 0.6).abs() < 1e-9);
    assert_eq!(count_valid_features(&features), 2);
}

#[test]
fn test_average_features_counts_present_objects_with_missing_fields() {
    // Second object is present but has no energy value: it contributes zero
    // to the sum and still counts in the divisor.
    let features = vec![Some(energy_only(0.8)), Some(AudioFeatures::default())];

    let avg = average_features(&features);
    assert!((avg.energy - 0.4).abs() < 1e-9);
    assert_eq!(count_valid_features(&features), 2);
}

#[test]
fn test_average_features_no_valid_tracks_yields_zero_vector() {
    let features: Vec<Option<AudioFeatures>> = vec![None, None];

    let avg = average_features(&features);
    assert_eq!(avg.energy, 0.0);
    assert_eq!(avg.danceability, 0.0);
    assert_eq!(avg.speechiness, 0.0);
    assert_eq!(avg.acousticness, 0.0);
    assert_eq!(avg.instrumentalness, 0.0);
    assert_eq!(avg.liveness, 0.0);
    assert_eq!(avg.valence, 0.0);

    // Loudness stays zero too: the rescale is skipped when nothing was
    // averaged, so an empty batch never reads as maximum loudness.
    assert_eq!(avg.loudness, 0.0);
}

#[test]
fn test_average_features_rescales_loudness_after_averaging() {
    let features = vec![
        Some(AudioFeatures {
            loudness: Some(-60.0),
            ..AudioFeatures::default()
        }),
        Some(AudioFeatures {
            loudness: Some(0.0),
            ..AudioFeatures::default()
        }),
    ];

    // Average is -30 dB, which maps to the middle of the [0, 1] scale.
    let avg = average_features(&features);
    assert!((avg.loudness - 0.5).abs() < 1e-9);
}

#[test]
fn test_base_url_derives_scheme_from_host() {
    assert_eq!(
        base_url(&headers_with_host("localhost:3000")),
        "http://localhost:3000"
    );
    assert_eq!(
        base_url(&headers_with_host("myapp.example.com")),
        "https://myapp.example.com"
    );

    // Without a host the redirect targets stay relative
    assert_eq!(base_url(&HeaderMap::new()), "");
}
