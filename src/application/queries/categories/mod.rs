mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use get_by_id::GetCategoryByIdQuery;
pub use get_by_slug::GetCategoryBySlugQuery;
pub use list::ListCategoriesQuery;
pub use service::CategoryQueryService;
