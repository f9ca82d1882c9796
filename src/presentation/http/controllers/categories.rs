// src/presentation/http/controllers/categories.rs
use crate::application::{
    admin::CATEGORY_ADMIN,
    commands::categories::{
        BulkActionCommand, CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
    },
    dto::{AdminLayoutDto, BulkActionResultDto, CategoryDto},
    ports::storage::ImageUpload,
    queries::categories::{GetCategoryByIdQuery, GetCategoryBySlugQuery, ListCategoriesQuery},
};
use crate::domain::category::CategoryFilter;
use crate::presentation::http::display;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminAuthorized;
use crate::presentation::http::openapi::CategoryListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Change-list query string. Date hierarchy drill-down uses `year`, `month`, `day`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    /// Case-insensitive search over name and description.
    #[serde(default)]
    pub q: Option<String>,
    /// Ordering: `name`, `-name`, `is_active`, `-is_active`, `created_at`, `-created_at`.
    #[serde(default)]
    pub o: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
}

impl From<CategoryListParams> for ListCategoriesQuery {
    fn from(params: CategoryListParams) -> Self {
        Self {
            filter: CategoryFilter {
                is_active: params.is_active,
                created_from: params.created_from,
                created_to: params.created_to,
                year: params.year,
                month: params.month,
                day: params.day,
                search: params.q,
            },
            ordering: params.o,
            page: params.page,
        }
    }
}

/// Multipart body accepted by create and update. On update every part is optional.
#[allow(dead_code)]
#[derive(Debug, ToSchema)]
pub struct CategoryForm {
    pub name: String,
    /// Leave blank to derive the slug from the name.
    pub slug: Option<String>,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    pub description: Option<String>,
    /// `#RRGGBB`, defaults to `#000000`.
    pub color_code: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkActionRequest {
    pub ids: Vec<i64>,
}

/// One change-list row: the category plus its rendered display columns.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryRowView {
    #[serde(flatten)]
    pub category: CategoryDto,
    pub colored_name: String,
    pub image_preview: String,
    pub description_display: String,
}

impl CategoryRowView {
    pub fn from_dto(category: CategoryDto) -> HttpResult<Self> {
        let colored_name = display::colored_name(&category.name, &category.color_code)
            .map_err(|err| HttpError::internal(format!("failed to render name: {err}")))?;
        let image_preview = display::image_preview(Some(&category.image_url))
            .map_err(|err| HttpError::internal(format!("failed to render preview: {err}")))?;
        let description_display = CATEGORY_ADMIN
            .display_or_empty(&category.description)
            .to_string();
        Ok(Self {
            category,
            colored_name,
            image_preview,
            description_display,
        })
    }
}

#[derive(Debug, Default)]
struct CategoryFormData {
    name: Option<String>,
    slug: Option<String>,
    image: Option<ImageUpload>,
    description: Option<String>,
    color_code: Option<String>,
    is_active: Option<bool>,
}

fn parse_checkbox(value: &str) -> HttpResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" | "" => Ok(false),
        other => Err(HttpError::bad_request(format!(
            "is_active: '{other}' is not a boolean"
        ))),
    }
}

async fn read_form(mut multipart: Multipart) -> HttpResult<CategoryFormData> {
    let mut form = CategoryFormData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(HttpError::from_multipart)?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field.bytes().await.map_err(HttpError::from_multipart)?;
            // Browsers send an empty, unnamed part when no file was chosen.
            if file_name.is_empty() && data.is_empty() {
                continue;
            }
            form.image = Some(ImageUpload {
                file_name,
                content_type,
                data,
            });
            continue;
        }

        let text = field.text().await.map_err(HttpError::from_multipart)?;
        match name.as_str() {
            "name" => form.name = Some(text),
            "slug" => form.slug = Some(text),
            "description" => form.description = Some(text),
            "color_code" => form.color_code = Some(text),
            "is_active" => form.is_active = Some(parse_checkbox(&text)?),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    Ok(form)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "One page of the category change list.", body = CategoryListResponse),
        (status = 400, description = "Invalid filter or ordering.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    Query(params): Query<CategoryListParams>,
) -> HttpResult<Json<CategoryListResponse>> {
    let page = state
        .services
        .category_queries
        .list_categories(params.into())
        .await
        .into_http()?;

    let items = page
        .items
        .into_iter()
        .map(CategoryRowView::from_dto)
        .collect::<HttpResult<Vec<_>>>()?;

    Ok(Json(CategoryListResponse {
        items,
        count: page.count,
        page: page.page,
        per_page: page.per_page,
        num_pages: page.num_pages,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let form = read_form(multipart).await?;
    let command = CreateCategoryCommand {
        name: form.name.unwrap_or_default(),
        slug: form.slug,
        image: form.image,
        description: form.description,
        color_code: form.color_code,
        is_active: form.is_active,
    };

    let created = state
        .services
        .category_commands
        .create_category(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category detail.", body = CategoryDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    let category = state
        .services
        .category_queries
        .get_category_by_id(GetCategoryByIdQuery { id })
        .await
        .into_http()?;
    Ok(Json(category))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body(content = CategoryForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already in use.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> HttpResult<Json<CategoryDto>> {
    let form = read_form(multipart).await?;
    let command = UpdateCategoryCommand {
        id,
        name: form.name,
        slug: form.slug,
        image: form.image,
        description: form.description,
        color_code: form.color_code,
        is_active: form.is_active,
    };

    let updated = state
        .services
        .category_commands
        .update_category(command)
        .await
        .into_http()?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/categories/layout",
    responses(
        (status = 200, description = "Change list and form layout.", body = AdminLayoutDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn admin_layout(_admin: AdminAuthorized) -> Json<AdminLayoutDto> {
    Json(AdminLayoutDto::from(&CATEGORY_ADMIN))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/categories/actions/{action}",
    params(("action" = String, Path, description = "Registered action name, e.g. `make_active`")),
    request_body = BulkActionRequest,
    responses(
        (status = 200, description = "Action applied.", body = BulkActionResultDto),
        (status = 400, description = "Empty or invalid selection.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown action.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn run_action(
    Extension(state): Extension<HttpState>,
    _admin: AdminAuthorized,
    Path(action): Path<String>,
    Json(payload): Json<BulkActionRequest>,
) -> HttpResult<Json<BulkActionResultDto>> {
    let result = state
        .services
        .category_commands
        .run_bulk_action(BulkActionCommand {
            action,
            ids: payload.ids,
        })
        .await
        .into_http()?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Active category.", body = CategoryDto),
        (status = 404, description = "No active category with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    let category = state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Json(category))
}
