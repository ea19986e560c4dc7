//! MIME type detection for embedded web assets.

const OCTET_STREAM: &str = "application/octet-stream";

/// Detect MIME type from a file path's extension.
pub fn mime_for_path(path: &str) -> &'static str {
    mime_guess::from_path(path).first_raw().unwrap_or(OCTET_STREAM)
}
