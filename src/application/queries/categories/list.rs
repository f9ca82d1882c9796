use super::CategoryQueryService;
use crate::{
    application::{
        admin::CATEGORY_ADMIN,
        dto::{CategoryDto, Page},
        error::ApplicationResult,
    },
    domain::category::{CategoryFilter, CategoryOrdering, PageRequest},
};

/// Admin change-list query. Every field is optional; the default lists all
/// categories ordered by name, first page.
#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery {
    pub filter: CategoryFilter,
    pub ordering: Option<String>,
    pub page: Option<u32>,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Page<CategoryDto>> {
        query.filter.validate()?;
        let ordering = query
            .ordering
            .as_deref()
            .map(CategoryOrdering::parse)
            .transpose()?
            .unwrap_or_default();
        let request = PageRequest::new(query.page.unwrap_or(1), CATEGORY_ADMIN.list_per_page);

        let page = self
            .repo
            .list_page(&query.filter, ordering, request)
            .await?;

        let storage = self.storage.as_ref();
        let items = page
            .items
            .into_iter()
            .map(|category| CategoryDto::from_category(category, storage))
            .collect();
        Ok(Page::new(items, page.total, request.page, request.per_page))
    }
}
