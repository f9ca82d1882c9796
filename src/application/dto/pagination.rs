use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numbered page as shown by the admin change list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub page: u32,
    pub per_page: u32,
    pub num_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, count: u64, page: u32, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let num_pages = count.div_ceil(u64::from(per_page)).max(1);
        Self {
            items,
            count,
            page,
            per_page,
            num_pages: u32::try_from(num_pages).unwrap_or(u32::MAX),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            page: self.page,
            per_page: self.per_page,
            num_pages: self.num_pages,
        }
    }
}
