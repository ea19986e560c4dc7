/*!
 * Embedded FS Tests
 * Behaviour of the compiled-in web UI bundle through the filesystem contract
 */

use pretty_assertions::assert_eq;
use std::io::{Read, Seek, SeekFrom};

use webui_assets::{AssetTable, EmbeddedFS, FileSystem, VfsError};

const INDEX: &[u8] = include_bytes!("../../assets/index.html");
const FAVICON: &[u8] = include_bytes!("../../assets/favicon.svg");
const BUNDLE_PATH: &str = "/static/bundle.4291ed58e375d5dda15f.js";

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn read_all(fs: &EmbeddedFS, path: &str) -> Vec<u8> {
    let mut file = fs.open(path).unwrap();
    let mut data = Vec::new();
    file.read_to_end(&mut data).unwrap();
    data
}

#[test]
fn test_open_index_html() {
    init_test_tracing();
    let fs = EmbeddedFS::embedded();

    let file = fs.open("/index.html").unwrap();
    let metadata = file.metadata().unwrap();
    assert_eq!(metadata.name, "index.html");
    assert_eq!(metadata.size, 388);
    assert!(metadata.is_file());
    assert_eq!(metadata.content_type(), "text/html");

    assert_eq!(read_all(&fs, "/index.html"), INDEX);
}

#[test]
fn test_root_falls_back_to_index() {
    init_test_tracing();
    let fs = EmbeddedFS::embedded();

    let metadata = fs.open("/").unwrap().metadata().unwrap();
    assert!(metadata.is_dir());
    assert_eq!(metadata.name, "index.html");
    assert_eq!(metadata.size, 388);
    assert_eq!(read_all(&fs, "/"), INDEX);
}

#[test]
fn test_open_bundle() {
    let fs = EmbeddedFS::embedded();

    let metadata = fs.open(BUNDLE_PATH).unwrap().metadata().unwrap();
    assert_eq!(metadata.size, 392_358);
    assert!(matches!(
        metadata.content_type(),
        "text/javascript" | "application/javascript"
    ));
    assert_eq!(read_all(&fs, BUNDLE_PATH).len(), 392_358);
}

#[test]
fn test_missing_path_is_not_found() {
    let fs = EmbeddedFS::embedded();

    match fs.open("/does-not-exist") {
        Err(VfsError::NotFound(path)) => assert_eq!(path, "/does-not-exist"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing path opened"),
    }
    assert!(!fs.exists("/does-not-exist"));
}

#[test]
fn test_lookup_favicon_bytes() {
    let table = AssetTable::embedded();

    let data = table.lookup("/favicon.svg").unwrap();
    assert_eq!(&data[..], FAVICON);
    assert_eq!(data.len() as u64, table.get("/favicon.svg").unwrap().size());
    assert_eq!(table.must_lookup("/favicon.svg"), data);
}

#[test]
fn test_every_asset_opens_with_stored_bytes() {
    let fs = EmbeddedFS::embedded();
    let table = fs.table();
    assert_eq!(table.len(), 3);

    for path in table.paths() {
        let stored = table.lookup(path).unwrap();
        let file = fs.open(path).unwrap();
        let metadata = file.metadata().unwrap();

        assert!(metadata.is_file(), "{path} should be a regular file");
        assert_eq!(metadata.size, stored.len() as u64);
        assert_eq!(read_all(&fs, path), &stored[..]);
    }
}

#[test]
fn test_double_slashes_resolve_identically() {
    let fs = EmbeddedFS::embedded();

    let doubled = "//static//bundle.4291ed58e375d5dda15f.js";
    assert_eq!(read_all(&fs, doubled), read_all(&fs, BUNDLE_PATH));
    assert_eq!(
        fs.open(doubled).unwrap().metadata().unwrap(),
        fs.open(BUNDLE_PATH).unwrap().metadata().unwrap()
    );
}

#[test]
fn test_reread_after_rewind() {
    let fs = EmbeddedFS::embedded();
    let mut file = fs.open(BUNDLE_PATH).unwrap();

    let mut first = Vec::new();
    file.read_to_end(&mut first).unwrap();
    assert_eq!(file.seek(SeekFrom::Start(0)).unwrap(), 0);
    let mut second = Vec::new();
    file.read_to_end(&mut second).unwrap();

    assert_eq!(first.len(), 392_358);
    assert!(first == second, "rewound read differs");
}

#[test]
fn test_partial_range_read() {
    let fs = EmbeddedFS::embedded();
    let mut file = fs.open("/index.html").unwrap();

    // What a Range: bytes=-14 request does
    file.seek(SeekFrom::End(-14)).unwrap();
    let mut tail = String::new();
    file.read_to_string(&mut tail).unwrap();
    assert_eq!(tail, "body>\n</html>\n");
}

#[test]
fn test_close_then_read_fails() {
    let fs = EmbeddedFS::embedded();
    let mut file = fs.open("/favicon.svg").unwrap();
    file.close();
    file.close();
    assert!(file.is_closed());

    let mut buf = [0u8; 16];
    assert!(file.read(&mut buf).is_err());

    // Other handles are unaffected
    assert_eq!(read_all(&fs, "/favicon.svg"), FAVICON);
}

#[test]
fn test_manifest_lists_embedded_bundle() {
    let manifest = AssetTable::embedded().manifest();
    let paths: Vec<&str> = manifest.iter().map(|entry| entry.path.as_str()).collect();
    assert_eq!(paths, vec!["/favicon.svg", "/index.html", BUNDLE_PATH]);

    let json = serde_json::to_string(&manifest).unwrap();
    assert!(json.contains(r#""name":"favicon.svg""#));
}
