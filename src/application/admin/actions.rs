// src/application/admin/actions.rs

/// A named bulk operation. Every action in this admin maps a selection onto
/// one target `is_active` state; running it yields the affected row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkAction {
    pub name: &'static str,
    pub description: &'static str,
    pub target_state: bool,
}

impl BulkAction {
    fn state_label(&self) -> &'static str {
        if self.target_state { "active" } else { "inactive" }
    }

    pub fn message(&self, affected: u64) -> String {
        format!(
            "{affected} category(ies) were successfully marked as {}.",
            self.state_label()
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BulkActionRegistry {
    actions: &'static [BulkAction],
}

impl BulkActionRegistry {
    pub const fn new(actions: &'static [BulkAction]) -> Self {
        Self { actions }
    }

    pub fn get(&self, name: &str) -> Option<&'static BulkAction> {
        self.actions.iter().find(|action| action.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static BulkAction> {
        self.actions.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|action| action.name).collect()
    }
}

pub const CATEGORY_ACTIONS: BulkActionRegistry = BulkActionRegistry::new(&[
    BulkAction {
        name: "make_active",
        description: "Mark selected categories as active",
        target_state: true,
    },
    BulkAction {
        name: "make_inactive",
        description: "Mark selected categories as inactive",
        target_state: false,
    },
]);
