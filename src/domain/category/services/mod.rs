// src/domain/category/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::entity::{Category, CategoryDraft, CategoryUpdate, SlugSource};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::value_objects::{CategoryName, CategorySlug, SLUG_MAX_CHARS};
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound on candidates tried for one write (`base`, `base-1`, ... `base-99`).
pub const MAX_SLUG_ATTEMPTS: u32 = 100;

/// Base used when a name slugifies to nothing, e.g. `"!!!"`.
pub const FALLBACK_SLUG_BASE: &str = "category";

/// Domain service that writes categories while keeping slugs unique.
///
/// Uniqueness is decided by the store: each candidate is written directly and
/// a `DuplicateSlug` rejection advances to the next numeric suffix.
pub struct CategorySlugService {
    repo: Arc<dyn CategoryRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl CategorySlugService {
    pub fn new(repo: Arc<dyn CategoryRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub fn base_slug(&self, name: &CategoryName) -> String {
        let slugified = self.generator.slugify(name.as_str());
        let base = if slugified.is_empty() {
            FALLBACK_SLUG_BASE.to_string()
        } else {
            slugified
        };
        truncate_slug(&base, SLUG_MAX_CHARS)
    }

    /// Candidate for the given attempt: `base` first, then `base-1`, `base-2`, ...
    pub fn candidate(base: &str, attempt: u32) -> DomainResult<CategorySlug> {
        if attempt == 0 {
            return CategorySlug::new(truncate_slug(base, SLUG_MAX_CHARS));
        }
        let suffix = format!("-{attempt}");
        let head = truncate_slug(base, SLUG_MAX_CHARS.saturating_sub(suffix.len()));
        CategorySlug::new(format!("{head}{suffix}"))
    }

    pub async fn insert(&self, draft: CategoryDraft, source: SlugSource) -> DomainResult<Category> {
        match source {
            SlugSource::Explicit(slug) => self
                .repo
                .insert(draft.with_slug(slug))
                .await
                .map_err(explicit_conflict),
            SlugSource::Derived => {
                let base = self.base_slug(&draft.name);
                for attempt in 0..MAX_SLUG_ATTEMPTS {
                    let slug = Self::candidate(&base, attempt)?;
                    match self.repo.insert(draft.clone().with_slug(slug)).await {
                        Err(DomainError::DuplicateSlug(taken)) => {
                            tracing::debug!(slug = %taken, attempt, "slug taken, trying next candidate");
                        }
                        other => return other,
                    }
                }
                Err(exhausted(&base))
            }
        }
    }

    /// Apply `update`, resolving the slug first when `source` asks for one.
    pub async fn update(
        &self,
        update: CategoryUpdate,
        name: &CategoryName,
        source: Option<SlugSource>,
    ) -> DomainResult<Category> {
        match source {
            None => self.repo.update(update).await.map_err(explicit_conflict),
            Some(SlugSource::Explicit(slug)) => self
                .repo
                .update(update.with_slug(slug))
                .await
                .map_err(explicit_conflict),
            Some(SlugSource::Derived) => {
                let base = self.base_slug(name);
                for attempt in 0..MAX_SLUG_ATTEMPTS {
                    let slug = Self::candidate(&base, attempt)?;
                    match self.repo.update(update.clone().with_slug(slug)).await {
                        Err(DomainError::DuplicateSlug(taken)) => {
                            tracing::debug!(slug = %taken, attempt, "slug taken, trying next candidate");
                        }
                        other => return other,
                    }
                }
                Err(exhausted(&base))
            }
        }
    }
}

fn explicit_conflict(err: DomainError) -> DomainError {
    match err {
        DomainError::DuplicateSlug(slug) => {
            DomainError::Conflict(format!("slug: category with slug '{slug}' already exists"))
        }
        other => other,
    }
}

fn exhausted(base: &str) -> DomainError {
    tracing::warn!(base, "no free slug within {MAX_SLUG_ATTEMPTS} candidates");
    DomainError::Conflict(format!(
        "slug: no free slug derived from '{base}' after {MAX_SLUG_ATTEMPTS} attempts"
    ))
}

/// Cut to at most `max` characters and drop separators left dangling at the end.
fn truncate_slug(value: &str, max: usize) -> String {
    let cut: String = value.chars().take(max).collect();
    let trimmed = cut.trim_end_matches(['-', '_']);
    if trimmed.is_empty() {
        FALLBACK_SLUG_BASE.chars().take(max).collect()
    } else {
        trimmed.to_string()
    }
}
