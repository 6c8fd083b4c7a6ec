use super::*;

/// Fake upstream that only answers when called with the expected token.
fn upstream() -> Router {
    fn authorised(headers: &HeaderMap) -> bool {
        headers.get("x-api-key").and_then(|v| v.to_str().ok()) == Some("server-token")
    }

    Router::new()
        .route(
            "/server",
            get(|headers: HeaderMap| async move {
                assert!(authorised(&headers));
                Json(serde_json::json!({ "Name": "NYRP Live", "JoinCode": "live1", "OwnerId": 1 }))
            }),
        )
        .route(
            "/server/players",
            get(|headers: HeaderMap| async move {
                assert!(authorised(&headers));
                Json(serde_json::json!([
                    { "Player": "a:1", "Permission": "Normal" },
                    { "Player": "b:2", "Permission": "Administrator" },
                    { "Player": "c:3", "Permission": "Moderator" },
                ]))
            }),
        )
        .route(
            "/server/queue",
            get(|| async { Json(serde_json::json!([11, 12])) }),
        )
}

/// Tests the snapshot without an upstream token.
///
/// Expected: static fallback values
#[tokio::test]
async fn serves_fallback_without_token() {
    let http = client();
    let config = config(closed_url().await, None);

    let status = StatusService::new(&http, &config).current().await;

    assert_eq!(status.server_name, FALLBACK_SERVER_NAME);
    assert_eq!(status.players_online, 1);
    assert_eq!(status.staff_online, 1);
    assert_eq!(status.server_code, "nyrp");
    assert_eq!(status.queue_count, 0);
    assert_eq!(status.quick_join, "https://join.nyrp.com");
    assert!(status.last_updated > 0);
}

/// Tests proxying a reachable upstream.
///
/// Expected: counts and join code taken from the upstream payloads
#[tokio::test]
async fn proxies_upstream() {
    let http = client();
    let config = config(serve(upstream()).await, Some("server-token"));

    let status = StatusService::new(&http, &config).current().await;

    assert_eq!(status.server_name, "NYRP Live");
    assert_eq!(status.players_online, 3);
    assert_eq!(status.staff_online, 2);
    assert_eq!(status.queue_count, 2);
    assert_eq!(status.server_code, "live1");
    assert_eq!(status.quick_join, format!("{QUICK_JOIN_PREFIX}live1"));
}

/// Tests an unreachable upstream.
///
/// Expected: static fallback values instead of an error
#[tokio::test]
async fn falls_back_when_upstream_unreachable() {
    let http = client();
    let config = config(closed_url().await, Some("server-token"));

    let status = StatusService::new(&http, &config).current().await;

    assert_eq!(status.server_name, FALLBACK_SERVER_NAME);
}

/// Tests an upstream answering with an error status.
///
/// Expected: static fallback values
#[tokio::test]
async fn falls_back_on_upstream_error_status() {
    let http = client();
    let router = Router::new().route(
        "/server",
        get(|| async { (axum::http::StatusCode::FORBIDDEN, "forbidden") }),
    );
    let config = config(serve(router).await, Some("server-token"));

    let status = StatusService::new(&http, &config).current().await;

    assert_eq!(status.server_code, "nyrp");
}
