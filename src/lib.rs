//! bucket-mirror library
//!
//! This crate provides the core functionality for the `bucket-mirror` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the mirror workflow:
//!
//! - [`listing`] - Walks the bucket's paginated listing and extracts object keys
//! - [`mirror`] - Maps keys to local paths and downloads the missing objects
//! - [`cli`] - Command-line interface for orchestrating the mirror workflow
//! - [`config`] - Run configuration, from defaults or a TOML file
//! - [`models`] - Data structures representing listing pages and run outcomes
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow enumerates every key in the bucket, then downloads the
//! ones that are not already present locally:
//!
//! ```no_run
//! use bucket_mirror::{config::MirrorConfig, errors::AppResult, listing, mirror};
//!
//! # async fn example() -> AppResult<()> {
//! let config = MirrorConfig::default();
//! let client = reqwest::Client::new();
//!
//! // Collect every downloadable key from the paginated listing
//! let fetcher = listing::HttpPageFetcher::new(client.clone());
//! let keys = listing::enumerate_keys(&fetcher, &config).await?;
//!
//! // Download whatever is missing from the local tree
//! let downloader = mirror::HttpObjectDownloader::new(client);
//! let report = mirror::sync_keys(&downloader, &keys, &config).await?;
//! println!("{} new file(s)", report.downloaded);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod mirror;
pub mod models;
pub mod ui;
