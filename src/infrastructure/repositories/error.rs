use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CATEGORY_NAME_LENGTH: &str = "categories_name_length_chk";
const CNT_CATEGORY_COLOR: &str = "categories_color_code_chk";

/// Map a database error onto the domain. `slug` is the value that was being
/// written, reported back when the slug constraint fires.
pub fn map_sqlx_with_slug(err: sqlx::Error, slug: Option<&str>) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG => {
                        DomainError::DuplicateSlug(slug.unwrap_or_default().to_string())
                    }
                    CNT_CATEGORY_NAME_LENGTH => DomainError::Validation(
                        "name: ensure this value has at most 100 characters".into(),
                    ),
                    CNT_CATEGORY_COLOR => {
                        DomainError::Validation("color_code: expected a #RRGGBB hex colour".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::DuplicateSlug(slug.unwrap_or_default().to_string());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    map_sqlx_with_slug(err, None)
}
