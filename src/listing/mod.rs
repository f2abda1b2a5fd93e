//! Bucket index enumeration.
//!
//! This module turns a paginated S3-compatible listing endpoint into the
//! complete ordered sequence of downloadable object keys. The main entry
//! point is [`enumerate_keys`]; page bodies are parsed permissively by
//! [`parse_listing_page`] and fetched through the [`PageFetcher`] seam.

mod enumerator;
mod extract;
mod key_filter;

// Re-export public API
pub use enumerator::{enumerate_keys, HttpPageFetcher, PageFetcher};
pub use extract::{extract_tagged_values, parse_listing_page};
pub use key_filter::is_downloadable_key;
