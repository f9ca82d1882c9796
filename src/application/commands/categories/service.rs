// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        ports::{
            storage::{ImageStorage, ImageUpload},
            time::Clock,
        },
    },
    domain::category::{CategoryRepository, ImagePath, services::CategorySlugService},
};

pub struct CategoryCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<CategorySlugService>,
    pub(super) storage: Arc<dyn ImageStorage>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CategoryCommandService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<CategorySlugService>,
        storage: Arc<dyn ImageStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            slug_service,
            storage,
            clock,
        }
    }

    pub(super) async fn store_image(&self, upload: ImageUpload) -> ApplicationResult<ImagePath> {
        upload.validate()?;
        self.storage.store(upload, self.clock.now()).await
    }

    /// Drop an image written for a category write that did not go through.
    pub(super) async fn discard_image(&self, path: &ImagePath) {
        if let Err(err) = self.storage.remove(path).await {
            tracing::warn!(image = %path, error = %err, "failed to remove orphaned image");
        }
    }
}
