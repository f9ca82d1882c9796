// src/domain/category/listing.rs
use crate::domain::category::entity::Category;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Columns an admin listing may be ordered by. The default is `name` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrdering {
    #[default]
    NameAsc,
    NameDesc,
    IsActiveAsc,
    IsActiveDesc,
    CreatedAtAsc,
    CreatedAtDesc,
}

impl CategoryOrdering {
    /// Parse the admin `o` parameter (`name`, `-name`, `created_at`, ...).
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.trim() {
            "" | "name" => Ok(Self::NameAsc),
            "-name" => Ok(Self::NameDesc),
            "is_active" => Ok(Self::IsActiveAsc),
            "-is_active" => Ok(Self::IsActiveDesc),
            "created_at" => Ok(Self::CreatedAtAsc),
            "-created_at" => Ok(Self::CreatedAtDesc),
            other => Err(DomainError::Validation(format!(
                "o: unsupported ordering '{other}'"
            ))),
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::NameDesc => "-name",
            Self::IsActiveAsc => "is_active",
            Self::IsActiveDesc => "-is_active",
            Self::CreatedAtAsc => "created_at",
            Self::CreatedAtDesc => "-created_at",
        }
    }
}

/// Filters composed by the admin list view. All set filters must match.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub is_active: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub search: Option<String>,
}

impl CategoryFilter {
    /// Trimmed search term, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(from), Some(to)) = (self.created_from, self.created_to) {
            if from > to {
                return Err(DomainError::Validation(
                    "created_from: must not be after created_to".into(),
                ));
            }
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(DomainError::Validation("month: must be between 1 and 12".into()));
            }
            if self.year.is_none() {
                return Err(DomainError::Validation("month: requires year".into()));
            }
        }
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return Err(DomainError::Validation("day: must be between 1 and 31".into()));
            }
            if self.month.is_none() {
                return Err(DomainError::Validation("day: requires month".into()));
            }
        }
        Ok(())
    }

    /// In-process evaluation of the filter, mirroring the SQL the repository emits.
    pub fn matches(&self, category: &Category) -> bool {
        use chrono::Datelike;

        if self.is_active.is_some_and(|flag| flag != category.is_active) {
            return false;
        }
        if self.created_from.is_some_and(|from| category.created_at < from) {
            return false;
        }
        if self.created_to.is_some_and(|to| category.created_at > to) {
            return false;
        }
        if self.year.is_some_and(|year| category.created_at.year() != year) {
            return false;
        }
        if self.month.is_some_and(|month| category.created_at.month() != month) {
            return false;
        }
        if self.day.is_some_and(|day| category.created_at.day() != day) {
            return false;
        }
        if let Some(term) = self.search_term() {
            let needle = term.to_lowercase();
            let in_name = category.name.as_str().to_lowercase().contains(&needle);
            let in_description = category.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub items: Vec<Category>,
    pub total: u64,
}
