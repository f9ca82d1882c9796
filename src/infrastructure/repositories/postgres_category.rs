// src/infrastructure/repositories/postgres_category.rs
use super::{map_sqlx, map_sqlx_with_slug};
use crate::domain::category::{
    Category, CategoryFilter, CategoryId, CategoryName, CategoryOrdering, CategoryPage,
    CategoryRepository, CategorySlug, CategoryUpdate, ColorCode, ImagePath, NewCategory,
    PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id, name, slug, image, description, color_code, is_active, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    image: String,
    description: String,
    color_code: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            image: ImagePath::new(row.image)?,
            description: row.description,
            color_code: ColorCode::new(row.color_code)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &CategoryFilter) {
    builder.push(" WHERE TRUE");

    if let Some(is_active) = filter.is_active {
        builder.push(" AND is_active = ");
        builder.push_bind(is_active);
    }
    if let Some(from) = filter.created_from {
        builder.push(" AND created_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = filter.created_to {
        builder.push(" AND created_at <= ");
        builder.push_bind(to);
    }
    if let Some(year) = filter.year {
        builder.push(" AND CAST(EXTRACT(YEAR FROM created_at AT TIME ZONE 'UTC') AS INTEGER) = ");
        builder.push_bind(year);
    }
    if let Some(month) = filter.month {
        builder.push(" AND CAST(EXTRACT(MONTH FROM created_at AT TIME ZONE 'UTC') AS INTEGER) = ");
        builder.push_bind(to_i32(month));
    }
    if let Some(day) = filter.day {
        builder.push(" AND CAST(EXTRACT(DAY FROM created_at AT TIME ZONE 'UTC') AS INTEGER) = ");
        builder.push_bind(to_i32(day));
    }
    if let Some(term) = filter.search_term() {
        let pattern = like_pattern(term);
        builder.push(" AND (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

fn order_clause(ordering: CategoryOrdering) -> &'static str {
    match ordering {
        CategoryOrdering::NameAsc => " ORDER BY name ASC, id ASC",
        CategoryOrdering::NameDesc => " ORDER BY name DESC, id ASC",
        CategoryOrdering::IsActiveAsc => " ORDER BY is_active ASC, name ASC, id ASC",
        CategoryOrdering::IsActiveDesc => " ORDER BY is_active DESC, name ASC, id ASC",
        CategoryOrdering::CreatedAtAsc => " ORDER BY created_at ASC, id ASC",
        CategoryOrdering::CreatedAtDesc => " ORDER BY created_at DESC, id ASC",
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            image,
            description,
            color_code,
            is_active,
            created_at,
            updated_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (name, slug, image, description, color_code, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(image.as_str())
        .bind(description.as_str())
        .bind(color_code.as_str())
        .bind(is_active)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx_with_slug(err, Some(slug.as_str())))?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let CategoryUpdate {
            id,
            name,
            slug,
            image,
            description,
            color_code,
            is_active,
            updated_at,
        } = update;

        let slug_str: Option<String> = slug.map(Into::into);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug_str.clone() {
            builder.push(", slug = ");
            builder.push_bind(slug);
        }
        if let Some(image) = image {
            builder.push(", image = ");
            builder.push_bind(image.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(color_code) = color_code {
            builder.push(", color_code = ");
            builder.push_bind(color_code.into_inner());
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_with_slug(err, slug_str.as_deref()))?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {COLUMNS} FROM categories WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &CategoryFilter,
        ordering: CategoryOrdering,
        page: PageRequest,
    ) -> DomainResult<CategoryPage> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM categories");
        push_filters(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(COLUMNS);
        builder.push(" FROM categories");
        push_filters(&mut builder, filter);
        builder.push(order_clause(ordering));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.per_page));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CategoryPage {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn set_active_bulk(
        &self,
        ids: &[CategoryId],
        is_active: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let ids: Vec<i64> = ids.iter().map(|id| i64::from(*id)).collect();
        let result = sqlx::query(
            "UPDATE categories SET is_active = $1, updated_at = $2 WHERE id = ANY($3)",
        )
        .bind(is_active)
        .bind(updated_at)
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}
