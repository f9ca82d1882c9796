// src/application/commands/categories/mod.rs
mod bulk;
mod create;
mod delete;
mod service;
mod update;

pub use bulk::BulkActionCommand;
pub use create::{CreateCategoryCommand, CreateCategoryCommandBuilder};
pub use delete::DeleteCategoryCommand;
pub use service::CategoryCommandService;
pub use update::UpdateCategoryCommand;
