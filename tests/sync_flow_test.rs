//! End-to-end test for the enumerate-then-sync mirror flow

#[path = "common/mod.rs"]
mod common;

use bucket_mirror::config::MirrorConfig;
use bucket_mirror::listing::enumerate_keys;
use bucket_mirror::mirror::sync_keys;
use bucket_mirror::models::SyncReport;
use common::{listing_page_body, RecordingDownloader, ScriptedFetcher};
use tempfile::TempDir;

fn scripted_pages() -> Vec<String> {
    vec![
        listing_page_body(&["a.zip", "dir/", "index.html"], Some("m1")),
        listing_page_body(&["b.zip"], None),
    ]
}

#[tokio::test]
async fn test_full_mirror_flow() {
    let temp_dir = TempDir::new().unwrap();
    let config = MirrorConfig {
        bucket_url: "https://bucket.example.org".to_string(),
        download_root: temp_dir.path().to_path_buf(),
        page_delay_ms: 0,
    };

    // First run: walk both listing pages, then fetch the two objects.
    let fetcher = ScriptedFetcher::new(scripted_pages());
    let keys = enumerate_keys(&fetcher, &config).await.unwrap();
    assert_eq!(keys, vec!["a.zip", "b.zip"]);
    assert_eq!(fetcher.requests().len(), 2);

    let downloader = RecordingDownloader::new();
    let report = sync_keys(&downloader, &keys, &config).await.unwrap();

    assert_eq!(
        report,
        SyncReport {
            downloaded: 2,
            skipped: 0,
            failed: 0
        }
    );
    assert_eq!(
        downloader.requests(),
        vec![
            "https://bucket.example.org/a.zip",
            "https://bucket.example.org/b.zip",
        ]
    );
    assert!(temp_dir.path().join("a.zip").exists());
    assert!(temp_dir.path().join("b.zip").exists());

    // Second run against the unchanged bucket: re-enumerates, downloads nothing.
    let fetcher = ScriptedFetcher::new(scripted_pages());
    let keys = enumerate_keys(&fetcher, &config).await.unwrap();

    let downloader = RecordingDownloader::new();
    let report = sync_keys(&downloader, &keys, &config).await.unwrap();

    assert_eq!(
        report,
        SyncReport {
            downloaded: 0,
            skipped: 2,
            failed: 0
        }
    );
    assert!(downloader.requests().is_empty());
}
