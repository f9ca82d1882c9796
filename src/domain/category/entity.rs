// src/domain/category/entity.rs
use crate::domain::category::value_objects::{
    CategoryId, CategoryName, CategorySlug, ColorCode, ImagePath,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub image: ImagePath,
    pub description: String,
    pub color_code: ColorCode,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.updated_at = now;
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())
    }
}

/// How the slug of a new or edited category is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugSource {
    /// Supplied by the caller; a collision is a hard conflict.
    Explicit(CategorySlug),
    /// Derived from the name; collisions advance the numeric suffix.
    Derived,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub image: ImagePath,
    pub description: String,
    pub color_code: ColorCode,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A category ready to be written except for its slug, which the slug
/// service resolves at write time.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: CategoryName,
    pub image: ImagePath,
    pub description: String,
    pub color_code: ColorCode,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl CategoryDraft {
    /// Both timestamps start at `created_at`.
    pub fn with_slug(self, slug: CategorySlug) -> NewCategory {
        NewCategory {
            name: self.name,
            slug,
            image: self.image,
            description: self.description,
            color_code: self.color_code,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Partial update. `created_at` is never part of an update.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<CategorySlug>,
    pub image: Option<ImagePath>,
    pub description: Option<String>,
    pub color_code: Option<ColorCode>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            image: None,
            description: None,
            color_code: None,
            is_active: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_slug(mut self, slug: CategorySlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_image(mut self, image: ImagePath) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_color_code(mut self, color_code: ColorCode) -> Self {
        self.color_code = Some(color_code);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}
