// src/infrastructure/storage.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::storage::{ImageStorage, ImageUpload, dated_directory},
};
use crate::domain::category::ImagePath;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

const MAX_NAME_ATTEMPTS: usize = 8;

/// Stores images on local disk below `root`, served from `base_url`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalImageStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

/// Keep only the final path component and characters in `[A-Za-z0-9._-]`;
/// whitespace becomes `_`.
pub fn sanitize_file_name(raw: &str) -> String {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    let cleaned: String = base
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else {
                None
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}

/// `name.ext` → `name_<suffix>.ext`.
fn with_suffix(file_name: &str, suffix: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_{suffix}.{ext}"),
        _ => format!("{file_name}_{suffix}"),
    }
}

fn random_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..7].to_string()
}

/// Write `data` into the freshly created `target`. A partial file is removed
/// again when the write fails.
async fn write_new_file<W>(mut file: W, target: &Path, data: &[u8]) -> ApplicationResult<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(data).await {
        Ok(()) => file.flush().await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        if let Err(cleanup) = tokio::fs::remove_file(target).await {
            tracing::warn!(path = %target.display(), error = %cleanup, "failed to remove partial image");
        }
        return Err(ApplicationError::io("failed to write image", err));
    }
    Ok(())
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(
        &self,
        upload: ImageUpload,
        uploaded_at: DateTime<Utc>,
    ) -> ApplicationResult<ImagePath> {
        let directory = dated_directory(uploaded_at);
        let absolute_dir = self.root.join(&directory);
        tokio::fs::create_dir_all(&absolute_dir)
            .await
            .map_err(|err| ApplicationError::io("failed to create image directory", err))?;

        let file_name = sanitize_file_name(&upload.file_name);
        let mut candidate = file_name.clone();
        for _ in 0..MAX_NAME_ATTEMPTS {
            let target = absolute_dir.join(&candidate);
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
                .await
            {
                Ok(file) => {
                    write_new_file(file, &target, &upload.data).await?;
                    tracing::debug!(path = %target.display(), bytes = upload.data.len(), "image stored");
                    return Ok(ImagePath::new(format!("{directory}/{candidate}"))?);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    candidate = with_suffix(&file_name, &random_suffix());
                }
                Err(err) => return Err(ApplicationError::io("failed to create image file", err)),
            }
        }

        Err(ApplicationError::infrastructure(format!(
            "could not find a free file name for '{file_name}'"
        )))
    }

    async fn remove(&self, path: &ImagePath) -> ApplicationResult<()> {
        match tokio::fs::remove_file(self.root.join(path.as_str())).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::io("failed to remove image", err)),
        }
    }

    fn url(&self, path: &ImagePath) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.as_str())
    }
}
