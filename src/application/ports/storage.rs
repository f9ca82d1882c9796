// src/application/ports/storage.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::category::ImagePath;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Upload directory for category images; files land in `category_images/YYYY/MM/DD/`.
pub const CATEGORY_IMAGE_DIR: &str = "category_images";

pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl ImageUpload {
    /// Lowercased extension of the submitted file name, if any.
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        if self.data.is_empty() {
            return Err(ApplicationError::invalid_field(
                "image",
                "the submitted file is empty",
            ));
        }
        match self.extension() {
            Some(ext) if ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ApplicationError::invalid_field(
                "image",
                format!(
                    "file extension is not allowed, allowed extensions are: {}",
                    ALLOWED_IMAGE_EXTENSIONS.join(", ")
                ),
            )),
        }
    }
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist the payload and return its storage-relative path. Never inspects the bytes.
    async fn store(
        &self,
        upload: ImageUpload,
        uploaded_at: DateTime<Utc>,
    ) -> ApplicationResult<ImagePath>;

    /// Best-effort removal of a stored image, used when the write that needed it failed.
    async fn remove(&self, path: &ImagePath) -> ApplicationResult<()>;

    /// Public URL under which a stored image can be retrieved.
    fn url(&self, path: &ImagePath) -> String;
}

/// `category_images/YYYY/MM/DD` for the given upload time.
pub fn dated_directory(uploaded_at: DateTime<Utc>) -> String {
    format!("{CATEGORY_IMAGE_DIR}/{}", uploaded_at.format("%Y/%m/%d"))
}
