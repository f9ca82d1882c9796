// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use vitrine_admin::application::ports::{storage::ImageStorage, time::Clock, util::SlugGenerator};
use vitrine_admin::application::services::ApplicationServices;
use vitrine_admin::domain::category::CategoryRepository;
use vitrine_admin::infrastructure::util::DefaultSlugGenerator;
use vitrine_admin::presentation::http::{
    routes::{RouterOptions, build_router},
    state::{AdminToken, HttpState},
};

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const BOUNDARY: &str = "vitrine-test-boundary";

/// テスト用のサービス一式。リポジトリとストレージは呼び出し側で検査できるよう返す。
pub struct TestServices {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<mocks::InMemoryCategoryRepo>,
    pub storage: Arc<mocks::InMemoryImageStorage>,
}

pub fn build_services_with(repo: Arc<mocks::InMemoryCategoryRepo>) -> TestServices {
    let storage = Arc::new(mocks::InMemoryImageStorage::default());
    let category_repo: Arc<dyn CategoryRepository> = repo.clone();
    let image_storage: Arc<dyn ImageStorage> = storage.clone();
    let clock: Arc<dyn Clock> = Arc::new(mocks::TickingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        image_storage,
        clock,
        slugger,
    ));

    TestServices {
        services,
        repo,
        storage,
    }
}

pub fn build_services() -> TestServices {
    build_services_with(Arc::new(mocks::InMemoryCategoryRepo::new()))
}

pub async fn build_test_state(repo: Arc<mocks::InMemoryCategoryRepo>) -> HttpState {
    let TestServices { services, .. } = build_services_with(repo);
    HttpState {
        services,
        admin_token: Some(AdminToken::new(ADMIN_TOKEN)),
    }
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with(Arc::new(mocks::InMemoryCategoryRepo::new())).await
}

/// 任意のリポジトリを差し込んだルーター（E2E テスト用）
pub async fn make_test_router_with(repo: Arc<mocks::InMemoryCategoryRepo>) -> axum::Router {
    let state = build_test_state(repo).await;
    build_router(state, RouterOptions::default())
}

/// 管理者トークン付きのリクエストを組み立てる
pub fn admin_request(method: Method, uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {ADMIN_TOKEN}"))
        .body(body)
        .unwrap()
}

/// multipart/form-data の本文を組み立てる。`image` は (ファイル名, 内容)。
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(method: Method, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {ADMIN_TOKEN}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
