pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, CategoryDraft, CategoryUpdate, NewCategory, SlugSource};
pub use listing::{CategoryFilter, CategoryOrdering, CategoryPage, PageRequest};
pub use repository::CategoryRepository;
pub use value_objects::{CategoryId, CategoryName, CategorySlug, ColorCode, ImagePath};
