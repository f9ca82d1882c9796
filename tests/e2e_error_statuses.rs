use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use tower::util::ServiceExt as _;

mod support;

use support::{
    CategoryBuilder, InMemoryCategoryRepo, admin_request, make_test_router,
    make_test_router_with, multipart_body, multipart_request,
};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

/// トークンなしの管理 API は 401 Unauthorized
#[tokio::test]
async fn e2e_admin_without_token_returns_401() {
    let app = make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/admin/categories")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// 誤ったトークンも 401 Unauthorized
#[tokio::test]
async fn e2e_admin_with_wrong_token_returns_401() {
    let app = make_test_router().await;

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/admin/categories/layout")
        .header(AUTHORIZATION, "Bearer not-the-token")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

/// 存在しない ID で 404 Not Found を返す
#[tokio::test]
async fn e2e_get_missing_category_returns_404() {
    let app = make_test_router().await;

    let resp = app
        .oneshot(admin_request(
            Method::GET,
            "/api/v1/admin/categories/12345",
            Body::empty(),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 画像なしの作成は 400 Bad Request
#[tokio::test]
async fn e2e_create_without_image_returns_400() {
    let app = make_test_router().await;

    let body = multipart_body(&[("name", "Shoes")], None);
    let resp = app
        .oneshot(multipart_request(Method::POST, "/api/v1/admin/categories", body))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 明示スラグの重複は 409 Conflict
#[tokio::test]
async fn e2e_create_with_taken_slug_returns_409() {
    let repo = Arc::new(InMemoryCategoryRepo::with_categories(vec![
        CategoryBuilder::new().id(1).named("Shoes", "shoes").build(),
    ]));
    let app = make_test_router_with(repo).await;

    let body = multipart_body(
        &[("name", "More Shoes"), ("slug", "shoes")],
        Some(("shoes.png", PNG)),
    );
    let resp = app
        .oneshot(multipart_request(Method::POST, "/api/v1/admin/categories", body))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}

/// 未知のアクションは 404 Not Found
#[tokio::test]
async fn e2e_unknown_bulk_action_returns_404() {
    let app = make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/admin/categories/actions/delete_everything")
        .header(AUTHORIZATION, format!("Bearer {}", support::ADMIN_TOKEN))
        .header("content-type", "application/json")
        .body(Body::from(r#"{"ids":[1]}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 未対応の並び順は 400 Bad Request
#[tokio::test]
async fn e2e_unsupported_ordering_returns_400() {
    let app = make_test_router().await;

    let resp = app
        .oneshot(admin_request(
            Method::GET,
            "/api/v1/admin/categories?o=slug",
            Body::empty(),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

/// 不正な is_active 値は 400 Bad Request
#[tokio::test]
async fn e2e_invalid_checkbox_returns_400() {
    let app = make_test_router().await;

    let body = multipart_body(
        &[("name", "Shoes"), ("is_active", "sometimes")],
        Some(("shoes.png", PNG)),
    );
    let resp = app
        .oneshot(multipart_request(Method::POST, "/api/v1/admin/categories", body))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}
