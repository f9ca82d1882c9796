// tests/support/builders.rs
use bytes::Bytes;
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;
use vitrine_admin::application::ports::storage::ImageUpload;
use vitrine_admin::domain::category::*;

pub struct CategoryBuilder {
    id: i64,
    name: String,
    slug: String,
    description: String,
    color_code: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Test Category".into(),
            slug: "test-category".into(),
            description: String::new(),
            color_code: "#000000".into(),
            is_active: true,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// 名前とスラグをまとめて設定する
    pub fn named(mut self, name: impl Into<String>, slug: impl Into<String>) -> Self {
        self.name = name.into();
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn color(mut self, color_code: impl Into<String>) -> Self {
        self.color_code = color_code.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: CategoryId::new(self.id).unwrap(),
            name: CategoryName::new(self.name).unwrap(),
            image: ImagePath::new(format!("category_images/2024/01/01/{}.png", self.slug)).unwrap(),
            slug: CategorySlug::new(self.slug).unwrap(),
            description: self.description,
            color_code: ColorCode::new(self.color_code).unwrap(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// PNG ヘッダだけを持つアップロード
pub fn png_upload(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.into(),
        content_type: Some("image/png".into()),
        data: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}
