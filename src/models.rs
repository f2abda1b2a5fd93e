/// One parsed bucket-listing page.
///
/// Transient: produced from a single response body, consumed immediately by
/// the enumeration loop. `keys` holds the downloadable object keys in the
/// order the server emitted them; `next_marker` carries the continuation
/// marker when the listing has further pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub keys: Vec<String>,
    pub next_marker: Option<String>,
}

impl ListingPage {
    /// Returns `true` when this page ends the listing.
    pub fn is_final(&self) -> bool {
        self.next_marker.is_none()
    }
}

/// Outcome counts for one mirror run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Objects fetched during this run
    pub downloaded: usize,
    /// Objects skipped because the local file already exists
    pub skipped: usize,
    /// Objects that could not be fetched or mapped to a local path
    pub failed: usize,
}

impl SyncReport {
    /// Total number of keys the driver processed.
    pub fn total(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }
}
