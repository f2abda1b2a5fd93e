//! Download-or-skip sync driver.
//!
//! Consumes the key sequence produced by [`crate::listing`] and mirrors it
//! into the local download root. The main entry point is [`sync_keys`];
//! transfers go through the [`ObjectDownloader`] seam.

mod driver;
mod object_downloader;
mod paths;

// Re-export public API
pub use driver::sync_keys;
pub use object_downloader::{HttpObjectDownloader, ObjectDownloader};
pub use paths::{local_path_for, object_url};
