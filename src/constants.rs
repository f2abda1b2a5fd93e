// Baseline bucket (the KiCad downloads bucket at CERN)
pub const DEFAULT_BUCKET_URL: &str = "https://kicad-downloads.s3.cern.ch";
pub const DEFAULT_DOWNLOAD_ROOT: &str = "/storage/kicad/";

// Listing pagination
pub const MARKER_QUERY_PARAM: &str = "marker";
pub const DEFAULT_PAGE_DELAY_MS: u64 = 250;

// Tag names scanned in listing page bodies
pub const KEY_TAG: &str = "Key";
pub const NEXT_MARKER_TAG: &str = "NextMarker";

// Entries that are directory placeholders or site furniture, not objects
pub const SKIPPED_KEY_SUFFIXES: &[&str] = &["/", "index.html", "list.js", "favicon.ico"];

// Suffix for in-flight download temp files
pub const PART_SUFFIX: &str = ".part";
