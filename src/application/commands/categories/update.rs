// src/application/commands/categories/update.rs
use super::{
    CategoryCommandService,
    create::{parse_color_code, slug_source},
};
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::category::{Category, CategoryId, CategoryName, CategoryUpdate, SlugSource},
};

/// Edit of an existing category. `None` leaves a field untouched; a blank
/// `slug` asks for a fresh slug derived from the (possibly new) name and a
/// blank `color_code` resets the colour to `#000000`.
#[derive(Default)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub image: Option<ImageUpload>,
    pub description: Option<String>,
    pub color_code: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::category_not_found())?;

        let UpdateCategoryCommand {
            id: _,
            name,
            slug,
            image,
            description,
            color_code,
            is_active,
        } = command;

        let name = name.map(CategoryName::new).transpose()?;
        let source = slug
            .map(|raw| slug_source(Some(raw)))
            .transpose()?
            .and_then(|source| unchanged_slug_filter(source, &existing));
        let color_code = color_code.map(parse_color_code).transpose()?;

        let mut update = CategoryUpdate::new(id, self.clock.now());
        if let Some(name) = name.clone() {
            update = update.with_name(name);
        }
        if let Some(description) = description {
            update = update.with_description(description);
        }
        if let Some(color_code) = color_code {
            update = update.with_color_code(color_code);
        }
        if let Some(is_active) = is_active {
            update = update.with_is_active(is_active);
        }

        let stored_image = match image {
            Some(upload) => Some(self.store_image(upload).await?),
            None => None,
        };
        if let Some(image) = stored_image.clone() {
            update = update.with_image(image);
        }

        let effective_name = name.unwrap_or_else(|| existing.name.clone());
        match self
            .slug_service
            .update(update, &effective_name, source)
            .await
        {
            Ok(updated) => {
                tracing::info!(id = %updated.id, slug = %updated.slug, "category updated");
                Ok(CategoryDto::from_category(updated, self.storage.as_ref()))
            }
            Err(err) => {
                if let Some(image) = &stored_image {
                    self.discard_image(image).await;
                }
                Err(err.into())
            }
        }
    }
}

/// Re-submitting the current slug is not a change.
fn unchanged_slug_filter(source: SlugSource, existing: &Category) -> Option<SlugSource> {
    match source {
        SlugSource::Explicit(slug) if slug == existing.slug => None,
        other => Some(other),
    }
}
