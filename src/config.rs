use crate::constants::{DEFAULT_BUCKET_URL, DEFAULT_DOWNLOAD_ROOT, DEFAULT_PAGE_DELAY_MS};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Mirror run configuration with every value filled in (no Options).
///
/// Carries the baseline defaults and can be deserialized by the TOML
/// loader. Every field has a concrete value, so call sites read it without
/// unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MirrorConfig {
    /// Base URL of the bucket listing endpoint
    pub bucket_url: String,
    /// Local directory the bucket is mirrored into
    pub download_root: PathBuf,
    /// Delay between listing page fetches, in milliseconds
    pub page_delay_ms: u64,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            bucket_url: DEFAULT_BUCKET_URL.to_string(),
            download_root: PathBuf::from(DEFAULT_DOWNLOAD_ROOT),
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
        }
    }
}

impl MirrorConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults; unknown keys are rejected to
    /// prevent typos from being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed or contains unknown
    /// keys, and the validation errors of [`MirrorConfig::validate`] for
    /// unusable values.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: MirrorConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates that the configured values can drive a run.
    pub fn validate(&self) -> AppResult<()> {
        if self.bucket_url.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Bucket URL must not be empty".into(),
            ));
        }
        Url::parse(&self.bucket_url)?;

        if self.download_root.as_os_str().is_empty() {
            return Err(AppError::InvalidInput(
                "Download root must not be empty".into(),
            ));
        }

        Ok(())
    }
}
