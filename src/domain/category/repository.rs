use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::listing::{CategoryFilter, CategoryOrdering, CategoryPage, PageRequest};
use crate::domain::category::value_objects::{CategoryId, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence boundary for categories.
///
/// Implementations must enforce slug uniqueness themselves and report a
/// violation as `DomainError::DuplicateSlug`, so callers can retry with
/// another candidate.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    async fn list_page(
        &self,
        filter: &CategoryFilter,
        ordering: CategoryOrdering,
        page: PageRequest,
    ) -> DomainResult<CategoryPage>;
    /// Set `is_active` on every listed id in one batch and return how many rows matched.
    async fn set_active_bulk(
        &self,
        ids: &[CategoryId],
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;
}
