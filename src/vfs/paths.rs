/*!
 * Request Path Handling
 * Slash normalization and the directory index fallback candidate
 */

use std::borrow::Cow;

/// File served for a directory-style request
pub const INDEX_FILE: &str = "index.html";

/// Collapse every run of `/` into a single `/`
///
/// Nothing else is rewritten: no `.`/`..` resolution, no case folding,
/// no trailing-slash stripping. Paths that are already clean are borrowed.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if !path.contains("//") {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for ch in path.chars() {
        let is_slash = ch == '/';
        if !(is_slash && prev_slash) {
            out.push(ch);
        }
        prev_slash = is_slash;
    }
    Cow::Owned(out)
}

/// Check that a path is usable as a table key as-is
pub fn is_normalized(path: &str) -> bool {
    path.starts_with('/') && !path.contains("//")
}

/// Lookup key tried when `path` itself is not stored
///
/// The suffix is appended to the raw request and the result normalized
/// afterwards, so `/` and `` both resolve to `/index.html`.
pub fn index_candidate(path: &str) -> String {
    let candidate = format!("{path}/{INDEX_FILE}");
    normalize(&candidate).into_owned()
}

/// Final path component, used as the display name of an asset
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
