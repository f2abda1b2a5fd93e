use crate::constants::{KEY_TAG, NEXT_MARKER_TAG};
use crate::models::ListingPage;

use super::key_filter::is_downloadable_key;

/// Extracts the values delimited by `<tag>`...`</tag>` pairs from a listing body.
///
/// The body is treated as plain text, not parsed as XML: both delimiter tags
/// are replaced with newlines and every resulting line that is not itself a
/// tag line (one starting with `<`) is kept as a value. Empty fragments are
/// dropped. A body without any recognizable tags therefore yields an empty
/// vector instead of a parse error, which is exactly what the listing loop
/// wants for malformed or truncated pages.
///
/// # Arguments
///
/// * `body` - Raw response body of one bucket-listing request
/// * `tag` - Tag name without angle brackets (e.g. `"Key"`)
///
/// # Returns
///
/// All extracted values in the order they appear in the body.
pub fn extract_tagged_values(body: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    body.replace(&open, "\n")
        .replace(&close, "\n")
        .lines()
        .filter(|line| is_value_line(line))
        .map(str::to_string)
        .collect()
}

/// A value line is any fragment that is not a tag and not empty.
fn is_value_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('<')
}

/// Parses one listing response body into its downloadable keys and
/// continuation marker.
///
/// Key candidates are every `<Key>`-delimited value in the body, filtered
/// through [`is_downloadable_key`]. The marker is the first non-empty
/// `<NextMarker>`-delimited value, if any. Both scans share the permissive
/// extraction of [`extract_tagged_values`], so arbitrary surrounding
/// content is tolerated and a tagless body parses as an empty final page.
pub fn parse_listing_page(body: &str) -> ListingPage {
    let keys = extract_tagged_values(body, KEY_TAG)
        .into_iter()
        .filter(|key| is_downloadable_key(key))
        .collect();

    let next_marker = extract_tagged_values(body, NEXT_MARKER_TAG)
        .into_iter()
        .next();

    ListingPage { keys, next_marker }
}
