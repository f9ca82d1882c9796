pub mod admin;
pub mod categories;
pub mod pagination;

pub use admin::{
    AdminLayoutDto, BulkActionView, FieldGroupView, ListColumnView, ListFilterView,
    PrepopulatedFieldView,
};
pub use categories::{BulkActionResultDto, CategoryDto};
pub use pagination::Page;
