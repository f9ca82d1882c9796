// src/application/commands/categories/bulk.rs
use super::CategoryCommandService;
use crate::{
    application::{
        admin::{BulkAction, CATEGORY_ACTIONS},
        dto::BulkActionResultDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryId,
};

pub struct BulkActionCommand {
    pub action: String,
    pub ids: Vec<i64>,
}

impl CategoryCommandService {
    /// Run a registered bulk action over the selected ids in one batch.
    pub async fn run_bulk_action(
        &self,
        command: BulkActionCommand,
    ) -> ApplicationResult<BulkActionResultDto> {
        let action = CATEGORY_ACTIONS.get(&command.action).ok_or_else(|| {
            ApplicationError::unknown_action(&command.action, &CATEGORY_ACTIONS.names())
        })?;
        self.apply_bulk_action(action, command.ids).await
    }

    pub async fn make_active(&self, ids: Vec<i64>) -> ApplicationResult<BulkActionResultDto> {
        self.run_bulk_action(BulkActionCommand {
            action: "make_active".into(),
            ids,
        })
        .await
    }

    pub async fn make_inactive(&self, ids: Vec<i64>) -> ApplicationResult<BulkActionResultDto> {
        self.run_bulk_action(BulkActionCommand {
            action: "make_inactive".into(),
            ids,
        })
        .await
    }

    async fn apply_bulk_action(
        &self,
        action: &BulkAction,
        ids: Vec<i64>,
    ) -> ApplicationResult<BulkActionResultDto> {
        if ids.is_empty() {
            return Err(ApplicationError::invalid_field(
                "ids",
                "no categories selected",
            ));
        }

        let mut selection = ids
            .into_iter()
            .map(CategoryId::new)
            .collect::<Result<Vec<_>, _>>()?;
        selection.sort_unstable_by_key(|id| id.0);
        selection.dedup();

        let affected = self
            .repo
            .set_active_bulk(&selection, action.target_state, self.clock.now())
            .await?;

        tracing::info!(
            action = action.name,
            selected = selection.len(),
            affected,
            "bulk action applied"
        );

        Ok(BulkActionResultDto {
            action: action.name.to_string(),
            affected,
            message: action.message(affected),
        })
    }
}
