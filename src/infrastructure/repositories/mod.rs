// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;

pub use error::{map_sqlx, map_sqlx_with_slug};
pub use postgres_category::PostgresCategoryRepository;
