// src/presentation/http/routes.rs
use crate::presentation::http::controllers::categories;
use crate::presentation::http::openapi::{self, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Router settings that come from configuration rather than application state.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub media_root: PathBuf,
    /// Mount point for uploaded images; only local paths (`/media`) are served.
    pub media_url: String,
    pub max_upload_bytes: usize,
    pub allowed_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("./media"),
            media_url: "/media".into(),
            max_upload_bytes: 5 * 1024 * 1024,
            allowed_origins: vec!["*".into()],
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let admin = Router::new()
        .route(
            "/api/v1/admin/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/admin/categories/layout",
            get(categories::admin_layout),
        )
        .route(
            "/api/v1/admin/categories/actions/{action}",
            post(categories::run_action),
        )
        .route(
            "/api/v1/admin/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .layer(DefaultBodyLimit::max(options.max_upload_bytes));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/categories/by-slug/{slug}",
            get(categories::get_category_by_slug),
        )
        .merge(admin);

    let media_url = options.media_url.trim_end_matches('/');
    if media_url.starts_with('/') {
        router = router.nest_service(media_url, ServeDir::new(&options.media_root));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
