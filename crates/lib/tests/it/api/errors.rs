use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;
use widgets::api::{ApiConfig, ApiErrorBody};

use super::TestServer;

async fn error_body(response: reqwest::Response, expected: StatusCode) -> ApiErrorBody {
    assert_eq!(response.status(), expected);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_unknown_id_is_404_with_body() {
    let server = TestServer::start().await;
    let url = server.url(&format!("/widgets/{}", Uuid::new_v4()));

    let body = error_body(
        server.client.get(&url).send().await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(body.status, "NOT_FOUND");
    assert_eq!(body.message, "No Widgets found with the specified id");
    assert!(body.errors.is_empty());

    let response = server
        .client
        .put(&url)
        .json(&json!({"x": 0, "y": 0, "width": 1, "height": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_fields_are_listed() {
    let server = TestServer::start().await;

    let response = server
        .client
        .post(server.url("/widgets"))
        .json(&json!({"x": 1, "width": 0}))
        .send()
        .await
        .unwrap();

    let body = error_body(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body.status, "BAD_REQUEST");
    assert_eq!(body.message, "Request contains invalid parameters or body");
    assert_eq!(
        body.errors,
        vec![
            "y must not be null",
            "width must be greater than 0",
            "height must not be null",
        ]
    );
    assert_eq!(server.service.count(), 0);
}

#[tokio::test]
async fn test_invalid_update_changes_nothing() {
    let server = TestServer::start().await;
    let created: widgets::Widget = server
        .client
        .post(server.url("/widgets"))
        .json(&json!({"x": 0, "y": 0, "z": 1, "width": 1, "height": 1}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = server
        .client
        .put(server.url(&format!("/widgets/{}", created.id)))
        .json(&json!({"x": 0, "y": 0, "width": -1, "height": 1}))
        .send()
        .await
        .unwrap();
    error_body(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(server.service.get_by_id(&created.id).unwrap(), created);
}

#[tokio::test]
async fn test_malformed_input_is_400() {
    let server = TestServer::start().await;

    let response = server
        .client
        .get(server.url("/widgets/not-a-uuid"))
        .send()
        .await
        .unwrap();
    error_body(response, StatusCode::BAD_REQUEST).await;

    let response = server
        .client
        .post(server.url("/widgets"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    error_body(response, StatusCode::BAD_REQUEST).await;

    let response = server
        .client
        .get(server.url("/widgets?size=abc"))
        .send()
        .await
        .unwrap();
    error_body(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_page_size_bounds() {
    let server = TestServer::start_with(ApiConfig {
        default_page_size: 2,
        max_page_size: 5,
    })
    .await;

    for query in ["?size=0", "?size=6", "?page=-1"] {
        let response = server
            .client
            .get(server.url(&format!("/widgets{query}")))
            .send()
            .await
            .unwrap();
        let body = error_body(response, StatusCode::BAD_REQUEST).await;
        assert_eq!(body.errors.len(), 1, "{query}");
    }

    let response = server
        .client
        .get(server.url("/widgets?size=5"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_exhausted_z_is_conflict() {
    let server = TestServer::start().await;
    server
        .client
        .post(server.url("/widgets"))
        .json(&json!({"x": 0, "y": 0, "z": i64::MAX, "width": 1, "height": 1}))
        .send()
        .await
        .unwrap();

    let response = server
        .client
        .post(server.url("/widgets"))
        .json(&json!({"x": 0, "y": 0, "width": 1, "height": 1}))
        .send()
        .await
        .unwrap();

    let body = error_body(response, StatusCode::CONFLICT).await;
    assert_eq!(body.status, "CONFLICT");
    assert_eq!(server.service.count(), 1);
}
