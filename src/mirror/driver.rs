use crate::config::MirrorConfig;
use crate::errors::AppResult;
use crate::models::SyncReport;
use crate::ui;
use tracing::{debug, info, warn};
use url::Url;

use super::object_downloader::ObjectDownloader;
use super::paths::{local_path_for, object_url};

/// Syncs the enumerated keys into the download root, in order.
///
/// For each key the driver makes one download-or-skip decision: a file
/// already present at the derived local path is skipped on existence alone
/// (no size or checksum comparison), anything else is fetched through the
/// downloader collaborator.
///
/// # Behavior
///
/// - **Skip existing**: present files are never re-downloaded, which makes
///   repeated runs against an unchanged bucket idempotent.
/// - **Failure isolation**: each download runs inside its own failure
///   boundary; a failed object is logged and counted, never retried, and
///   never aborts the rest of the run.
/// - **Progress tracking**: a progress bar is displayed across the whole
///   key sequence.
///
/// # Errors
///
/// Returns an error only for run-level problems (an unparseable bucket
/// URL); per-object failures are reported through the returned
/// [`SyncReport`] instead.
pub async fn sync_keys(
    downloader: &impl ObjectDownloader,
    keys: &[String],
    config: &MirrorConfig,
) -> AppResult<SyncReport> {
    let bucket_url = Url::parse(&config.bucket_url)?;
    let root = config.download_root.as_path();

    info!(
        total = keys.len(),
        root = %root.display(),
        "Starting sync"
    );

    let pb = ui::create_progress_bar(keys.len() as u64)?;
    let mut report = SyncReport::default();

    for key in keys {
        let dest = match local_path_for(root, key) {
            Some(dest) => dest,
            None => {
                warn!(key = key.as_str(), "Key cannot be mapped inside the download root");
                report.failed += 1;
                pb.inc(1);
                continue;
            }
        };

        if dest.exists() {
            debug!(key = key.as_str(), "File already exists, skipping");
            report.skipped += 1;
            pb.inc(1);
            continue;
        }

        let url = match object_url(&bucket_url, key) {
            Ok(url) => url,
            Err(e) => {
                warn!(key = key.as_str(), error = %e, "Failed to build object URL");
                report.failed += 1;
                pb.inc(1);
                continue;
            }
        };

        pb.set_message(format!("Downloading {key}"));
        match downloader.download(&url, &dest).await {
            Ok(()) => {
                debug!(key = key.as_str(), "Downloaded");
                report.downloaded += 1;
            }
            Err(e) => {
                warn!(key = key.as_str(), error = %e, "Failed to download object");
                report.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "Downloaded {} file(s), skipped {}, failed {}",
        report.downloaded, report.skipped, report.failed
    ));

    info!(
        downloaded = report.downloaded,
        skipped = report.skipped,
        failed = report.failed,
        "Sync completed"
    );

    Ok(report)
}
