use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategorySlug,
};

pub struct GetCategoryBySlugQuery {
    pub slug: String,
}

impl CategoryQueryService {
    /// Public lookup; inactive categories are reported as missing.
    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let slug = CategorySlug::new(query.slug)
            .map_err(|_| ApplicationError::category_not_found())?;
        let category = self
            .repo
            .find_by_slug(&slug)
            .await?
            .filter(|category| category.is_active)
            .ok_or_else(|| ApplicationError::category_not_found())?;
        Ok(CategoryDto::from_category(category, self.storage.as_ref()))
    }
}
