// tests/support/mocks/storage.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;
use vitrine_admin::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{ImageStorage, ImageUpload, dated_directory},
};
use vitrine_admin::domain::category::ImagePath;

/// ディスクに書き込まず、保存・削除されたパスを記録するストレージ
#[derive(Default)]
pub struct InMemoryImageStorage {
    stored: Mutex<Vec<String>>,
    removed: Mutex<Vec<String>>,
}

impl InMemoryImageStorage {
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn store(
        &self,
        upload: ImageUpload,
        uploaded_at: DateTime<Utc>,
    ) -> ApplicationResult<ImagePath> {
        let mut stored = self.stored.lock().unwrap();
        let directory = dated_directory(uploaded_at);
        let mut path = format!("{directory}/{}", upload.file_name);
        if stored.contains(&path) {
            path = format!("{directory}/{}_{}", stored.len(), upload.file_name);
        }
        stored.push(path.clone());
        Ok(ImagePath::new(path)?)
    }

    async fn remove(&self, path: &ImagePath) -> ApplicationResult<()> {
        self.removed.lock().unwrap().push(path.as_str().to_string());
        Ok(())
    }

    fn url(&self, path: &ImagePath) -> String {
        format!("/media/{}", path.as_str())
    }
}

/// 常に保存に失敗するストレージ
pub struct FailingImageStorage;

#[async_trait]
impl ImageStorage for FailingImageStorage {
    async fn store(&self, _: ImageUpload, _: DateTime<Utc>) -> ApplicationResult<ImagePath> {
        Err(ApplicationError::infrastructure("disk full"))
    }

    async fn remove(&self, _: &ImagePath) -> ApplicationResult<()> {
        Ok(())
    }

    fn url(&self, path: &ImagePath) -> String {
        format!("/media/{}", path.as_str())
    }
}
