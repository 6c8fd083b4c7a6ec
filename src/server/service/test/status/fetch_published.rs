use super::*;

fn published() -> ServerStatusDto {
    ServerStatusDto {
        server_name: "New York Roleplay".to_string(),
        players_online: 7,
        staff_online: 2,
        server_code: "nyrp".to_string(),
        last_updated: 1,
        queue_count: 0,
        quick_join: "https://join.nyrp.com".to_string(),
    }
}

/// Tests reading a served status with the API key.
///
/// Expected: StatusReport::Live with the served body
#[tokio::test]
async fn reads_live_status() {
    let http = client();
    let router = Router::new().route(
        "/",
        get(|headers: HeaderMap| async move {
            assert_eq!(
                headers.get("authorization").and_then(|v| v.to_str().ok()),
                Some("secret")
            );
            Json(published())
        }),
    );
    let config = config(serve(router).await, None);

    let report = StatusService::new(&http, &config).fetch_published().await.unwrap();

    assert!(matches!(report, StatusReport::Live(status) if status == published()));
}

/// Tests reading an error body.
///
/// Expected: StatusReport::Rejected with the error text
#[tokio::test]
async fn reads_rejection() {
    let http = client();
    let router = Router::new().route(
        "/",
        get(|| async {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Unauthorized" })),
            )
        }),
    );
    let config = config(serve(router).await, None);

    let report = StatusService::new(&http, &config).fetch_published().await.unwrap();

    assert!(matches!(report, StatusReport::Rejected(body) if body.error == "Unauthorized"));
}

/// Tests an unreachable status API.
///
/// Expected: Err
#[tokio::test]
async fn unreachable_api_is_error() {
    let http = client();
    let config = config(closed_url().await, None);

    assert!(StatusService::new(&http, &config).fetch_published().await.is_err());
}
