use crate::application::admin::{AdminConfig, BulkAction, FieldGroup, GroupVisibility, ListColumn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldGroupView {
    pub name: String,
    pub fields: Vec<String>,
    pub collapsed: bool,
    pub read_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListColumnView {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    pub link: bool,
}

/// A sidebar filter and the query parameters it drives.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListFilterView {
    pub field: String,
    pub params: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrepopulatedFieldView {
    pub field: String,
    pub from: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkActionView {
    pub name: String,
    pub description: String,
}

/// Everything a client needs to lay out the category change list and form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLayoutDto {
    pub list_display: Vec<ListColumnView>,
    pub list_filter: Vec<ListFilterView>,
    pub search_fields: Vec<String>,
    pub list_per_page: u32,
    pub date_hierarchy: String,
    pub empty_value_display: String,
    pub fieldsets: Vec<FieldGroupView>,
    pub readonly_fields: Vec<String>,
    pub prepopulated_fields: Vec<PrepopulatedFieldView>,
    pub actions: Vec<BulkActionView>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl FieldGroupView {
    fn from_group(config: &AdminConfig, group: &FieldGroup) -> Self {
        Self {
            name: group.name.to_string(),
            fields: owned(group.fields),
            collapsed: group.visibility == GroupVisibility::Collapsed,
            read_only: config.group_is_read_only(group),
        }
    }
}

impl From<&ListColumn> for ListColumnView {
    fn from(column: &ListColumn) -> Self {
        Self {
            key: column.key.to_string(),
            label: column.label.to_string(),
            ordering: column.ordering.map(str::to_string),
            link: column.link,
        }
    }
}

impl From<&BulkAction> for BulkActionView {
    fn from(action: &BulkAction) -> Self {
        Self {
            name: action.name.to_string(),
            description: action.description.to_string(),
        }
    }
}

impl From<&AdminConfig> for AdminLayoutDto {
    fn from(config: &AdminConfig) -> Self {
        let (target, sources) = config.prepopulated_fields;
        Self {
            list_display: config.list_display.iter().map(Into::into).collect(),
            list_filter: config
                .list_filter
                .iter()
                .map(|filter| ListFilterView {
                    field: filter.field.to_string(),
                    params: owned(filter.params),
                })
                .collect(),
            search_fields: owned(config.search_fields),
            list_per_page: config.list_per_page,
            date_hierarchy: config.date_hierarchy.to_string(),
            empty_value_display: config.empty_value_display.to_string(),
            fieldsets: config
                .fieldsets
                .iter()
                .map(|group| FieldGroupView::from_group(config, group))
                .collect(),
            readonly_fields: owned(config.readonly_fields),
            prepopulated_fields: vec![PrepopulatedFieldView {
                field: target.to_string(),
                from: owned(sources),
            }],
            actions: config.actions.iter().map(Into::into).collect(),
        }
    }
}
