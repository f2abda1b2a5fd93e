use crate::constants::PART_SUFFIX;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;
use url::Url;

/// Transfers one remote object to a local file.
///
/// The sync driver decides *whether* to fetch; implementations of this
/// trait own *how* the bytes reach disk. Tests plug in recording fakes.
#[async_trait]
pub trait ObjectDownloader: Send + Sync {
    /// Fetches the object at `url` into `dest`, creating intermediate
    /// directories as needed.
    async fn download(&self, url: &Url, dest: &Path) -> AppResult<()>;
}

/// [`ObjectDownloader`] over HTTP(S).
///
/// Streams the response body into a `.part` temp file next to the final
/// path and atomically renames it when complete, so a partial transfer
/// never occupies the destination. Stale `.part` files from earlier runs
/// are removed before downloading.
pub struct HttpObjectDownloader {
    client: reqwest::Client,
}

impl HttpObjectDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectDownloader for HttpObjectDownloader {
    async fn download(&self, url: &Url, dest: &Path) -> AppResult<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let tmp_path = part_path(dest);

        // Remove stale tmp file if present (best-effort)
        if tmp_path.exists() {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                warn!(
                    file_path = %tmp_path.display(),
                    error = %e,
                    "Failed to remove stale temp file"
                );
            }
        }

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to download {url}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::NetworkError(format!("Failed to download {url}: {e}")))?;

        let mut file = File::create(&tmp_path).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to create temp file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| AppError::NetworkError(format!("Failed to read body of {url}: {e}")))?;
            file.write_all(&chunk).await.map_err(|e| {
                AppError::IoError(format!(
                    "Failed to write to temp file {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;
        }

        // Ensure the file is closed before renaming
        drop(file);

        fs::rename(&tmp_path, dest).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to rename temp file {} to {}: {}",
                tmp_path.display(),
                dest.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Temp-file path for an in-flight download of `dest`.
fn part_path(dest: &Path) -> PathBuf {
    let mut path = dest.as_os_str().to_owned();
    path.push(PART_SUFFIX);
    PathBuf::from(path)
}
