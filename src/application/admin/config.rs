// src/application/admin/config.rs
use super::actions::{BulkActionRegistry, CATEGORY_ACTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupVisibility {
    Visible,
    Collapsed,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub visibility: GroupVisibility,
}

#[derive(Debug, Clone, Copy)]
pub struct ListColumn {
    pub key: &'static str,
    pub label: &'static str,
    /// Ordering parameter the column sorts by, if sortable.
    pub ordering: Option<&'static str>,
    /// Whether the cell links to the edit view.
    pub link: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ListFilter {
    pub field: &'static str,
    pub params: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct AdminConfig {
    pub list_display: &'static [ListColumn],
    pub list_filter: &'static [ListFilter],
    pub search_fields: &'static [&'static str],
    pub list_per_page: u32,
    pub date_hierarchy: &'static str,
    pub empty_value_display: &'static str,
    pub fieldsets: &'static [FieldGroup],
    pub readonly_fields: &'static [&'static str],
    /// Target field and the fields it is prepopulated from.
    pub prepopulated_fields: (&'static str, &'static [&'static str]),
    pub actions: BulkActionRegistry,
}

impl AdminConfig {
    pub fn is_read_only(&self, field: &str) -> bool {
        self.readonly_fields.contains(&field)
    }

    /// A group is read-only when every member field is.
    pub fn group_is_read_only(&self, group: &FieldGroup) -> bool {
        group.fields.iter().all(|field| self.is_read_only(field))
    }

    pub fn group(&self, name: &str) -> Option<&'static FieldGroup> {
        self.fieldsets.iter().find(|group| group.name == name)
    }

    /// Display text for an empty value.
    pub fn display_or_empty<'a>(&'a self, value: &'a str) -> &'a str {
        if value.trim().is_empty() {
            self.empty_value_display
        } else {
            value
        }
    }
}

pub const CATEGORY_ADMIN: AdminConfig = AdminConfig {
    list_display: &[
        ListColumn {
            key: "colored_name",
            label: "Name",
            ordering: Some("name"),
            link: true,
        },
        ListColumn {
            key: "image_preview",
            label: "Image Preview",
            ordering: None,
            link: false,
        },
        ListColumn {
            key: "is_active",
            label: "Is active",
            ordering: Some("is_active"),
            link: false,
        },
        ListColumn {
            key: "created_at",
            label: "Created at",
            ordering: Some("created_at"),
            link: false,
        },
    ],
    list_filter: &[
        ListFilter {
            field: "is_active",
            params: &["is_active"],
        },
        ListFilter {
            field: "created_at",
            params: &["created_from", "created_to"],
        },
    ],
    search_fields: &["name", "description"],
    list_per_page: 20,
    date_hierarchy: "created_at",
    empty_value_display: "-empty-",
    fieldsets: &[
        FieldGroup {
            name: "Required",
            fields: &["name", "slug", "image", "is_active"],
            visibility: GroupVisibility::Visible,
        },
        FieldGroup {
            name: "Information",
            fields: &["description", "color_code"],
            visibility: GroupVisibility::Collapsed,
        },
        FieldGroup {
            name: "Timestamps",
            fields: &["created_at", "updated_at"],
            visibility: GroupVisibility::Collapsed,
        },
    ],
    readonly_fields: &["created_at", "updated_at"],
    prepopulated_fields: ("slug", &["name"]),
    actions: CATEGORY_ACTIONS,
};
