//! Shared test utilities for the simple-pub test suite.
//!
//! Provides fixture builders for source trees with controlled modification
//! times. Selection is mtime-driven, so fixtures must be able to say "this
//! file is older than that one" without sleeping between writes —
//! [`write_candidate`] takes an age in seconds relative to a fixed anchor
//! and stamps the file via [`std::fs::File::set_modified`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = site_fixture();
//! let manifest = scan(&tmp.path().join("website_output"), &config).unwrap();
//! assert_eq!(manifest.selected_candidate().filename, "landing-v2.html");
//! ```

use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;

/// Fixed instant the fixture mtimes hang off. Anchoring to a constant
/// rather than `SystemTime::now()` keeps ages deterministic: two files
/// written with the same age get exactly equal mtimes.
const FIXTURE_EPOCH_SECS: u64 = 1_756_000_000;

/// Write a candidate file with its mtime set to `age_secs` before the
/// fixture anchor. Larger ages mean older files.
pub fn write_candidate(dir: &Path, name: &str, body: &str, age_secs: u64) {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    set_age(&path, age_secs);
}

/// Stamp a file's mtime to `age_secs` before the fixture anchor.
pub fn set_age(path: &Path, age_secs: u64) {
    let mtime = UNIX_EPOCH + Duration::from_secs(FIXTURE_EPOCH_SECS - age_secs);
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}

/// Build the standard fixture tree:
///
/// ```text
/// <tmp>/website_output/
/// ├── landing-v1.html            (older)
/// ├── landing-v2.html            (newer — the expected selection)
/// └── assets/
///     ├── hero.png
///     ├── css/style.css
///     └── js/app.js
/// ```
pub fn site_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("website_output");
    fs::create_dir_all(&source).unwrap();

    write_candidate(&source, "landing-v1.html", "<html>version one</html>", 200);
    write_candidate(&source, "landing-v2.html", "<html>version two</html>", 100);

    let assets = source.join("assets");
    fs::create_dir_all(assets.join("css")).unwrap();
    fs::create_dir_all(assets.join("js")).unwrap();
    fs::write(assets.join("hero.png"), b"\x89PNG fake bytes").unwrap();
    fs::write(assets.join("css/style.css"), "body { margin: 0 }").unwrap();
    fs::write(assets.join("js/app.js"), "console.log('hi')").unwrap();

    tmp
}
