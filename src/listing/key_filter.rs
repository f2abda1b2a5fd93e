use crate::constants::SKIPPED_KEY_SUFFIXES;

/// Returns `true` when a listing entry names an object worth downloading.
///
/// Keys ending in `/` are directory placeholders; `index.html`, `list.js`
/// and `favicon.ico` entries are furniture for the bucket's browsable web
/// view. None of them are mirrored.
pub fn is_downloadable_key(key: &str) -> bool {
    !SKIPPED_KEY_SUFFIXES
        .iter()
        .any(|suffix| key.ends_with(suffix))
}
