//! The web UI bundle compiled into the binary.
//!
//! The frontend build writes its output to `assets/`; each file is listed
//! here under the request path the web application expects to serve.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A single file embedded at compile time.
#[derive(Debug)]
pub struct EmbeddedAsset {
    /// Request path (e.g. "/index.html", "/static/bundle.js").
    pub path: &'static str,
    /// File contents.
    pub data: &'static [u8],
}

pub static EMBEDDED_ASSETS: &[EmbeddedAsset] = &[
    EmbeddedAsset {
        path: "/index.html",
        data: include_bytes!("../../assets/index.html"),
    },
    EmbeddedAsset {
        path: "/favicon.svg",
        data: include_bytes!("../../assets/favicon.svg"),
    },
    EmbeddedAsset {
        path: "/static/bundle.4291ed58e375d5dda15f.js",
        data: include_bytes!("../../assets/static/bundle.4291ed58e375d5dda15f.js"),
    },
];

/// Used when the build does not set `SOURCE_DATE_EPOCH`
const DEFAULT_BUILD_EPOCH_SECS: u64 = 1_546_300_800;

/// Modification time reported for every embedded asset
///
/// Reproducible builds pin this through `SOURCE_DATE_EPOCH` at compile time.
pub fn build_time() -> SystemTime {
    let secs = option_env!("SOURCE_DATE_EPOCH")
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_BUILD_EPOCH_SECS);
    UNIX_EPOCH + Duration::from_secs(secs)
}
