use crate::application::ports::storage::ImageStorage;
use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Storage-relative path, e.g. `category_images/2024/01/31/shoes.png`.
    pub image: String,
    pub image_url: String,
    pub description: String,
    pub color_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryDto {
    pub fn from_category(category: Category, storage: &dyn ImageStorage) -> Self {
        let image_url = storage.url(&category.image);
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            image: category.image.into_inner(),
            image_url,
            description: category.description,
            color_code: category.color_code.into_inner(),
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkActionResultDto {
    pub action: String,
    pub affected: u64,
    pub message: String,
}
