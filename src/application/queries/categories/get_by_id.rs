use super::CategoryQueryService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct GetCategoryByIdQuery {
    pub id: i64,
}

impl CategoryQueryService {
    pub async fn get_category_by_id(
        &self,
        query: GetCategoryByIdQuery,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(query.id)?;
        let category = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::category_not_found())?;
        Ok(CategoryDto::from_category(category, self.storage.as_ref()))
    }
}
