//! Static description of the category admin: which columns the change list
//! shows, how the edit form is grouped, and which bulk actions exist.
mod actions;
mod config;

pub use actions::{BulkAction, BulkActionRegistry, CATEGORY_ACTIONS};
pub use config::{
    AdminConfig, CATEGORY_ADMIN, FieldGroup, GroupVisibility, ListColumn, ListFilter,
};
