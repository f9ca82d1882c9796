// tests/support/mocks/category_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Mutex;
use vitrine_admin::domain::category::{
    Category, CategoryFilter, CategoryId, CategoryOrdering, CategoryPage, CategoryRepository,
    CategorySlug, CategoryUpdate, NewCategory, PageRequest,
};
use vitrine_admin::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct RepoState {
    rows: Vec<Category>,
    next_id: i64,
}

/// スラグの一意性をストア側で強制するインメモリ実装
#[derive(Default)]
pub struct InMemoryCategoryRepo {
    state: Mutex<RepoState>,
}

impl InMemoryCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(rows: Vec<Category>) -> Self {
        let next_id = rows.iter().map(|row| row.id.0).max().unwrap_or(0);
        Self {
            state: Mutex::new(RepoState { rows, next_id }),
        }
    }

    pub fn snapshot(&self) -> Vec<Category> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn get(&self, id: i64) -> Option<Category> {
        self.snapshot().into_iter().find(|row| row.id.0 == id)
    }

    pub fn slugs(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .map(|row| row.slug.into_inner())
            .collect()
    }
}

fn compare(ordering: CategoryOrdering, a: &Category, b: &Category) -> std::cmp::Ordering {
    let by_name = a.name.as_str().cmp(b.name.as_str());
    let by_id = a.id.0.cmp(&b.id.0);
    match ordering {
        CategoryOrdering::NameAsc => by_name.then(by_id),
        CategoryOrdering::NameDesc => by_name.reverse().then(by_id),
        CategoryOrdering::IsActiveAsc => a.is_active.cmp(&b.is_active).then(by_name).then(by_id),
        CategoryOrdering::IsActiveDesc => b.is_active.cmp(&a.is_active).then(by_name).then(by_id),
        CategoryOrdering::CreatedAtAsc => a.created_at.cmp(&b.created_at).then(by_id),
        CategoryOrdering::CreatedAtDesc => b.created_at.cmp(&a.created_at).then(by_id),
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.rows.iter().any(|row| row.slug == category.slug) {
            return Err(DomainError::DuplicateSlug(category.slug.into_inner()));
        }
        state.next_id += 1;
        let created = Category {
            id: CategoryId::new(state.next_id)?,
            name: category.name,
            slug: category.slug,
            image: category.image,
            description: category.description,
            color_code: category.color_code,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        };
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state
                .rows
                .iter()
                .any(|row| row.id != update.id && &row.slug == slug)
            {
                return Err(DomainError::DuplicateSlug(slug.as_str().to_string()));
            }
        }
        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id == update.id)
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        if let Some(name) = update.name {
            row.name = name;
        }
        if let Some(slug) = update.slug {
            row.slug = slug;
        }
        if let Some(image) = update.image {
            row.image = image;
        }
        if let Some(description) = update.description {
            row.description = description;
        }
        if let Some(color_code) = update.color_code {
            row.color_code = color_code;
        }
        if let Some(is_active) = update.is_active {
            row.is_active = is_active;
        }
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        if state.rows.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.snapshot().into_iter().find(|row| row.id == id))
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self.snapshot().into_iter().find(|row| &row.slug == slug))
    }

    async fn list_page(
        &self,
        filter: &CategoryFilter,
        ordering: CategoryOrdering,
        page: PageRequest,
    ) -> DomainResult<CategoryPage> {
        let mut rows: Vec<Category> = self
            .snapshot()
            .into_iter()
            .filter(|row| filter.matches(row))
            .collect();
        rows.sort_by(|a, b| compare(ordering, a, b));
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page as usize)
            .collect();
        Ok(CategoryPage { items, total })
    }

    async fn set_active_bulk(
        &self,
        ids: &[CategoryId],
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut state = self.state.lock().unwrap();
        let mut affected = 0;
        for row in state.rows.iter_mut().filter(|row| ids.contains(&row.id)) {
            if is_active {
                row.activate(updated_at);
            } else {
                row.deactivate(updated_at);
            }
            affected += 1;
        }
        Ok(affected)
    }
}

/// 並行する書き込みが既にスラグを確保している状況を再現するリポジトリ。
/// `claimed` のスラグは検索では見えないが、書き込み時には重複として拒否される。
pub struct ContendedCategoryRepo {
    pub inner: InMemoryCategoryRepo,
    claimed: HashSet<String>,
    attempts: Mutex<Vec<String>>,
}

impl ContendedCategoryRepo {
    pub fn new(claimed: impl IntoIterator<Item = String>) -> Self {
        Self {
            inner: InMemoryCategoryRepo::new(),
            claimed: claimed.into_iter().collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// 書き込みを試みたスラグの履歴
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }

    fn check(&self, slug: &CategorySlug) -> DomainResult<()> {
        self.attempts.lock().unwrap().push(slug.as_str().to_string());
        if self.claimed.contains(slug.as_str()) {
            return Err(DomainError::DuplicateSlug(slug.as_str().to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for ContendedCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.check(&category.slug)?;
        self.inner.insert(category).await
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        if let Some(slug) = &update.slug {
            self.check(slug)?;
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.inner.delete(id).await
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        self.inner.find_by_slug(slug).await
    }

    async fn list_page(
        &self,
        filter: &CategoryFilter,
        ordering: CategoryOrdering,
        page: PageRequest,
    ) -> DomainResult<CategoryPage> {
        self.inner.list_page(filter, ordering, page).await
    }

    async fn set_active_bulk(
        &self,
        ids: &[CategoryId],
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        self.inner.set_active_bulk(ids, is_active, updated_at).await
    }
}
