// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::category::{CategoryDraft, CategoryName, CategorySlug, ColorCode, SlugSource},
};

pub struct CreateCategoryCommand {
    pub name: String,
    /// Blank or absent means "derive from the name".
    pub slug: Option<String>,
    pub image: Option<ImageUpload>,
    pub description: Option<String>,
    pub color_code: Option<String>,
    pub is_active: Option<bool>,
}

impl CreateCategoryCommand {
    pub fn builder() -> CreateCategoryCommandBuilder {
        CreateCategoryCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateCategoryCommandBuilder {
    name: Option<String>,
    slug: Option<String>,
    image: Option<ImageUpload>,
    description: Option<String>,
    color_code: Option<String>,
    is_active: Option<bool>,
}

impl CreateCategoryCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color_code(mut self, color_code: impl Into<String>) -> Self {
        self.color_code = Some(color_code.into());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn build(self) -> Result<CreateCategoryCommand, &'static str> {
        Ok(CreateCategoryCommand {
            name: self.name.ok_or("name is required")?,
            slug: self.slug,
            image: self.image,
            description: self.description,
            color_code: self.color_code,
            is_active: self.is_active,
        })
    }
}

/// Blank input asks for a derived slug; anything else must already be a valid slug.
pub(super) fn slug_source(raw: Option<String>) -> ApplicationResult<SlugSource> {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            Ok(SlugSource::Explicit(CategorySlug::new(value.trim())?))
        }
        _ => Ok(SlugSource::Derived),
    }
}

/// A cleared colour field falls back to the default `#000000`.
pub(super) fn parse_color_code(raw: String) -> ApplicationResult<ColorCode> {
    if raw.trim().is_empty() {
        Ok(ColorCode::default())
    } else {
        Ok(ColorCode::new(raw)?)
    }
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let CreateCategoryCommand {
            name,
            slug,
            image,
            description,
            color_code,
            is_active,
        } = command;

        let name = CategoryName::new(name)?;
        let source = slug_source(slug)?;
        let color_code = color_code.map(parse_color_code).transpose()?.unwrap_or_default();
        let upload =
            image.ok_or_else(|| ApplicationError::invalid_field("image", "this field is required"))?;

        let image = self.store_image(upload).await?;
        let draft = CategoryDraft {
            name,
            image: image.clone(),
            description: description.unwrap_or_default(),
            color_code,
            is_active: is_active.unwrap_or(true),
            created_at: self.clock.now(),
        };

        match self.slug_service.insert(draft, source).await {
            Ok(created) => {
                tracing::info!(id = %created.id, slug = %created.slug, "category created");
                Ok(CategoryDto::from_category(created, self.storage.as_ref()))
            }
            Err(err) => {
                self.discard_image(&image).await;
                Err(err.into())
            }
        }
    }
}
