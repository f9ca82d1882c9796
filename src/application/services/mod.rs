// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::categories::CategoryCommandService,
        ports::{storage::ImageStorage, time::Clock, util::SlugGenerator},
        queries::categories::CategoryQueryService,
    },
    domain::category::{CategoryRepository, services::CategorySlugService},
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        image_storage: Arc<dyn ImageStorage>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(CategorySlugService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&image_storage),
            Arc::clone(&clock),
        ));

        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            image_storage,
        ));

        Self {
            category_commands,
            category_queries,
        }
    }
}
