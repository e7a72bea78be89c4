//! Publish directory materialization.
//!
//! Stage 2 of the simple-pub pipeline. Takes the scan [`Manifest`] and makes
//! the publish directory match it:
//!
//! - creates the publish directory (and parents) if missing, idempotently
//! - copies the selected candidate byte-for-byte as the entry document
//! - mirrors the assets subtree, replace-don't-merge
//!
//! ## Output Structure
//!
//! ```text
//! docs/
//! ├── index.html                 # Selected candidate, renamed
//! └── assets/                    # Exact mirror of website_output/assets/
//!     ├── hero.png
//!     └── css/
//!         └── style.css
//! ```
//!
//! ## Assets Replacement
//!
//! The publish-side assets subtree is deleted recursively and recreated from
//! the source on every run. Merging would let files removed from the source
//! linger on the published site forever; wholesale replacement keeps the
//! mirror exact at the cost of also removing anything placed there by hand.
//! The two steps are not transactional — an error between delete and
//! recreate leaves the subtree absent and surfaces as [`PublishError::Io`],
//! and the next successful run repairs it. There is no cross-process
//! locking either: two publishes racing over the same directory can
//! interleave the delete and recreate steps.

use crate::config::PublishConfig;
use crate::scan::{self, Manifest, ScanError};
use crate::types::PublishSummary;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Run the full pipeline: scan the source, then materialize the result.
///
/// Scanning happens first, so on [`ScanError::SourceMissing`] or
/// [`ScanError::NoCandidates`] the publish directory is left exactly as it
/// was — not even created.
pub fn publish(
    source: &Path,
    publish_dir: &Path,
    config: &PublishConfig,
) -> Result<PublishSummary, PublishError> {
    let manifest = scan::scan(source, config)?;
    materialize(&manifest, source, publish_dir)
}

/// Materialize a scan manifest into the publish directory.
pub fn materialize(
    manifest: &Manifest,
    source: &Path,
    publish_dir: &Path,
) -> Result<PublishSummary, PublishError> {
    fs::create_dir_all(publish_dir)?;

    let selected = manifest.selected_candidate();
    let entry_path = publish_dir.join(&manifest.config.entry_name);
    fs::copy(source.join(&selected.filename), &entry_path)?;

    if manifest.assets.is_some() {
        mirror_assets(
            &source.join(&manifest.config.assets_dir),
            &publish_dir.join(&manifest.config.assets_dir),
        )?;
    }

    Ok(PublishSummary {
        selected: selected.filename.clone(),
        candidate_count: manifest.candidates.len(),
        entry_path: entry_path.display().to_string(),
        assets: manifest.assets.clone(),
    })
}

/// Replace `dst` with an exact copy of the `src` subtree.
///
/// Delete-then-recreate, never merge: files that disappeared from the source
/// must also disappear from the published site.
fn mirror_assets(src: &Path, dst: &Path) -> Result<(), PublishError> {
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(std::io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
