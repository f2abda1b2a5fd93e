//! Common test utilities for integration tests

use async_trait::async_trait;
use bucket_mirror::errors::{AppError, AppResult};
use bucket_mirror::listing::PageFetcher;
use bucket_mirror::mirror::ObjectDownloader;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use url::Url;

/// Builds a realistic bucket listing page body.
///
/// Real listing endpoints return the whole document on a single line, so the
/// body deliberately contains no newlines.
#[allow(dead_code)]
pub fn listing_page_body(keys: &[&str], next_marker: Option<&str>) -> String {
    let mut body = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Name>test-bucket</Name><Prefix></Prefix><Marker></Marker>"#,
    );

    if let Some(marker) = next_marker {
        body.push_str(&format!("<NextMarker>{marker}</NextMarker>"));
    }
    body.push_str("<MaxKeys>1000</MaxKeys>");
    body.push_str(if next_marker.is_some() {
        "<IsTruncated>true</IsTruncated>"
    } else {
        "<IsTruncated>false</IsTruncated>"
    });

    for key in keys {
        body.push_str(&format!(
            "<Contents><Key>{key}</Key><LastModified>2024-06-01T12:00:00.000Z</LastModified><ETag>&quot;fba9dede5f27731c&quot;</ETag><Size>4096</Size><StorageClass>STANDARD</StorageClass></Contents>"
        ));
    }

    body.push_str("</ListBucketResult>");
    body
}

/// Helper function to create a file with parent directories
#[allow(dead_code)]
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Serves a scripted sequence of page bodies and records every requested URL.
#[allow(dead_code)]
pub struct ScriptedFetcher {
    pages: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedFetcher {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::NetworkError("no more scripted pages".to_string()))
    }
}

/// Writes a placeholder payload for every requested object and records the URLs.
#[allow(dead_code)]
pub struct RecordingDownloader {
    requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingDownloader {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectDownloader for RecordingDownloader {
    async fn download(&self, url: &Url, dest: &Path) -> AppResult<()> {
        self.requests.lock().unwrap().push(url.to_string());
        write_file(dest, "payload");
        Ok(())
    }
}
