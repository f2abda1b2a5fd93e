use crate::errors::{AppError, AppResult};
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Maps an object key onto its local path under `root`.
///
/// The key's embedded `/` separators become nested directories, so the
/// result is simply `root` joined with the key. Keys that cannot land
/// inside the root — absolute keys or keys with parent-directory
/// components — yield `None`; the same stance archive extractors take
/// with hostile entry names.
pub fn local_path_for(root: &Path, key: &str) -> Option<PathBuf> {
    let mut mapped = PathBuf::new();
    for component in Path::new(key).components() {
        match component {
            Component::Normal(part) => mapped.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if mapped.as_os_str().is_empty() {
        return None;
    }

    Some(root.join(mapped))
}

/// Builds the remote URL for one object: bucket base URL + `/` + key.
///
/// The key is appended as literal path segments, never resolved as a URL
/// reference, so a key that itself looks like an absolute URL still names
/// a path on the bucket host.
pub fn object_url(bucket_url: &Url, key: &str) -> AppResult<Url> {
    let mut url = bucket_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            AppError::UrlError(format!(
                "bucket URL '{bucket_url}' cannot carry object paths"
            ))
        })?
        .pop_if_empty()
        .extend(key.split('/'));
    Ok(url)
}
