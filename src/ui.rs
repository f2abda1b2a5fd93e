use crate::errors::{AppError, AppResult};
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar with the standard application styling.
///
/// Centralizes the progress bar configuration so the sync phase renders
/// consistently wherever a bar is shown.
pub fn create_progress_bar(total: u64) -> AppResult<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| AppError::IoError(format!("Failed to create progress bar template: {e}")))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}
