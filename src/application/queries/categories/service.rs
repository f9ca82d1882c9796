use std::sync::Arc;

use crate::application::ports::storage::ImageStorage;
use crate::domain::category::CategoryRepository;

pub struct CategoryQueryService {
    pub(super) repo: Arc<dyn CategoryRepository>,
    pub(super) storage: Arc<dyn ImageStorage>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>, storage: Arc<dyn ImageStorage>) -> Self {
        Self { repo, storage }
    }
}
