//! Route-level tests driven through the router with `tower::ServiceExt`,
//! covering the branches that terminate before any upstream call.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use spotistats::server::router;

async fn get(uri: &str) -> axum::response::Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router().oneshot(req).await.expect("request")
}

async fn get_with_cookie(uri: &str, cookie: &str) -> axum::response::Response {
    let req = Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    router().oneshot(req).await.expect("request")
}

fn location(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse JSON")
}

#[tokio::test]
async fn health_returns_ok() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
    assert!(json.get("version").is_some(), "missing 'version' field");
}

#[tokio::test]
async fn callback_with_provider_error_redirects_to_error_page() {
    let resp = get("/api/callback?error=access_denied").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let loc = location(&resp);
    assert!(loc.starts_with("/error?message="), "got {loc}");
    assert!(loc.contains("access_denied"), "got {loc}");
}

#[tokio::test]
async fn callback_without_code_redirects_to_error_page() {
    let resp = get("/api/callback").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let loc = location(&resp);
    assert!(loc.contains("No%20authorization%20code"), "got {loc}");
}

#[tokio::test]
async fn callback_rejects_state_mismatch_before_exchange() {
    // Stored and returned state differ: the handler must answer with the
    // error redirect without ever contacting the token endpoint.
    let resp = get_with_cookie(
        "/api/callback?code=abc&state=forged",
        "spotify_auth_state=issued",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let loc = location(&resp);
    assert!(loc.contains("state%20mismatch"), "got {loc}");
}

#[tokio::test]
async fn callback_rejects_missing_returned_state() {
    let resp = get_with_cookie("/api/callback?code=abc", "spotify_auth_state=issued").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(location(&resp).contains("state%20mismatch"));
}

#[tokio::test]
async fn callback_rejects_state_without_stored_counterpart() {
    let resp = get("/api/callback?code=abc&state=issued").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(location(&resp).contains("state%20mismatch"));
}

#[tokio::test]
async fn callback_with_valid_state_still_terminates_in_redirect() {
    // With a matching state the flow moves on to configuration and exchange;
    // in the test environment that ends in the error redirect, never a body.
    let resp = get_with_cookie(
        "/api/callback?code=abc&state=issued",
        "spotify_auth_state=issued",
    )
    .await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(location(&resp).starts_with("/error?message="));
}

#[tokio::test]
async fn login_without_configuration_redirects_to_error_page() {
    let resp = get("/api/login").await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let loc = location(&resp);
    assert!(
        loc.contains("Server%20configuration%20error"),
        "got {loc}"
    );

    // The aborted flow must not have issued a state cookie
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn proxy_routes_without_session_cookie_return_unauthenticated() {
    let routes = [
        "/api/me",
        "/api/me/top/tracks",
        "/api/me/top/artists",
        "/api/me/player/recently-played",
        "/api/me/top/tracks/audio-features",
        "/api/me/most-recent-song",
        "/api/me/secret-song",
    ];

    for route in routes {
        let resp = get(route).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "route {route} must fail without a session"
        );

        let json = json_body(resp).await;
        assert_eq!(json["error"], "No access token found", "route {route}");
    }
}

#[tokio::test]
async fn error_page_renders_query_message() {
    let resp = get("/error?message=Something%20broke").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Something broke"));
}

#[tokio::test]
async fn error_page_escapes_markup_in_message() {
    let resp = get("/error?message=%3Cscript%3E").await;

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn index_links_to_login() {
    let resp = get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/api/login"));
}
