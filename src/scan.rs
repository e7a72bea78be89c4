//! Source directory scanning and manifest generation.
//!
//! Stage 1 of the simple-pub pipeline. Validates the source directory,
//! enumerates candidate landing page files, selects the one to publish, and
//! inventories the assets subtree — producing a [`Manifest`] that the publish
//! stage materializes.
//!
//! ## Expected Layout
//!
//! ```text
//! website_output/                  # Source directory
//! ├── landing-v1.html              # Candidates: <prefix>v<token>.<ext>
//! ├── landing-v2.html
//! ├── landing-v2.1-final.html
//! ├── notes.txt                    # Ignored — not a candidate
//! └── assets/                      # Optional — mirrored on publish
//!     ├── hero.png
//!     └── css/
//!         └── style.css
//! ```
//!
//! ## Selection
//!
//! The candidate with the **latest filesystem modification time** wins. The
//! version token embedded in the filename is never parsed for ordering, so a
//! `-v3` file restored from an old checkout can lose to a freshly touched
//! `-v2`. That rule comes straight from the workflow this tool serves (the
//! newest export is the one you just saved) and the scan output shows every
//! candidate's mtime so a surprising pick is easy to diagnose. Ties are
//! broken by filename (the lexicographically later name wins), so equal-mtime
//! candidates resolve deterministically.
//!
//! Enumeration is single-level: files in subdirectories are never candidates.

use crate::config::PublishConfig;
use crate::naming::parse_candidate_name;
use crate::types::{AssetsInfo, Candidate};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source directory not found: {0}")]
    SourceMissing(PathBuf),
    #[error("no candidate files matching {1} in {0}")]
    NoCandidates(PathBuf, String),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Source directory the scan ran against, as given.
    pub source: String,
    /// All candidates, sorted by filename.
    pub candidates: Vec<Candidate>,
    /// Index into `candidates` of the one that will be published.
    pub selected: usize,
    /// Assets subtree inventory, when the source has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<AssetsInfo>,
    /// Configuration the scan was performed under.
    pub config: PublishConfig,
}

impl Manifest {
    /// The candidate that publish will materialize.
    pub fn selected_candidate(&self) -> &Candidate {
        &self.candidates[self.selected]
    }
}

/// Scan the source directory into a [`Manifest`].
///
/// Fails with [`ScanError::SourceMissing`] before touching anything else when
/// the directory doesn't exist, and with [`ScanError::NoCandidates`] when it
/// exists but holds no file matching the candidate pattern.
pub fn scan(source: &Path, config: &PublishConfig) -> Result<Manifest, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::SourceMissing(source.to_path_buf()));
    }

    let mut candidates = collect_candidates(source, config)?;
    if candidates.is_empty() {
        let pattern = format!("{}v*.{}", config.page_prefix, config.page_extension);
        return Err(ScanError::NoCandidates(source.to_path_buf(), pattern));
    }

    candidates.sort_by(|a, b| a.filename.cmp(&b.filename));
    let selected = latest_candidate(&candidates);

    let assets = inventory_assets(source, &config.assets_dir)?;

    Ok(Manifest {
        source: source.display().to_string(),
        candidates,
        selected,
        assets,
        config: config.clone(),
    })
}

/// Enumerate candidate files directly inside the source directory.
fn collect_candidates(source: &Path, config: &PublishConfig) -> Result<Vec<Candidate>, ScanError> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().to_string();
        let Some(parsed) =
            parse_candidate_name(&filename, &config.page_prefix, &config.page_extension)
        else {
            continue;
        };

        candidates.push(Candidate {
            filename,
            version: parsed.token,
            modified: meta.modified()?,
            size: meta.len(),
        });
    }

    Ok(candidates)
}

/// Index of the candidate with the latest mtime; filename breaks ties.
fn latest_candidate(candidates: &[Candidate]) -> usize {
    candidates
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.filename.cmp(&b.filename))
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Walk the assets subtree, counting files and bytes. `None` when absent.
fn inventory_assets(source: &Path, assets_dir: &str) -> Result<Option<AssetsInfo>, ScanError> {
    let assets_path = source.join(assets_dir);
    if !assets_path.is_dir() {
        return Ok(None);
    }

    let mut file_count = 0;
    let mut total_bytes = 0;
    for entry in WalkDir::new(&assets_path) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            file_count += 1;
            total_bytes += entry.metadata().map_err(std::io::Error::from)?.len();
        }
    }

    Ok(Some(AssetsInfo {
        dir_name: assets_dir.to_string(),
        file_count,
        total_bytes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let config = PublishConfig::default();

        let result = scan(&tmp.path().join("website_output"), &config);
        assert!(matches!(result, Err(ScanError::SourceMissing(_))));
    }

    #[test]
    fn empty_source_has_no_candidates() {
        let tmp = TempDir::new().unwrap();
        let config = PublishConfig::default();

        let result = scan(tmp.path(), &config);
        assert!(matches!(result, Err(ScanError::NoCandidates(_, _))));
    }

    #[test]
    fn non_matching_files_are_not_candidates() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("landing.html"), "no version marker").unwrap();
        fs::write(tmp.path().join("notes.txt"), "notes").unwrap();
        let config = PublishConfig::default();

        let result = scan(tmp.path(), &config);
        assert!(matches!(result, Err(ScanError::NoCandidates(_, _))));
    }

    #[test]
    fn no_candidates_error_names_the_pattern() {
        let tmp = TempDir::new().unwrap();
        let config = PublishConfig::default();

        let err = scan(tmp.path(), &config).unwrap_err();
        assert!(err.to_string().contains("landing-v*.html"));
    }

    #[test]
    fn single_candidate_is_selected() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "<html>v1</html>", 100);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.candidates.len(), 1);
        assert_eq!(manifest.selected_candidate().filename, "landing-v1.html");
    }

    #[test]
    fn latest_mtime_wins() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "<html>v1</html>", 200);
        write_candidate(tmp.path(), "landing-v2.html", "<html>v2</html>", 100);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.selected_candidate().filename, "landing-v2.html");
    }

    #[test]
    fn mtime_beats_higher_version_token() {
        // A freshly touched v1 wins over an older v3 — tokens never order.
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v3.html", "<html>v3</html>", 500);
        write_candidate(tmp.path(), "landing-v1.html", "<html>v1</html>", 10);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.selected_candidate().filename, "landing-v1.html");
    }

    #[test]
    fn equal_mtimes_break_ties_by_filename() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "a", 100);
        write_candidate(tmp.path(), "landing-v2.html", "b", 100);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.selected_candidate().filename, "landing-v2.html");
    }

    #[test]
    fn candidates_sorted_by_filename() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v10.html", "x", 10);
        write_candidate(tmp.path(), "landing-v2.html", "y", 20);
        write_candidate(tmp.path(), "landing-v1.html", "z", 30);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        let names: Vec<&str> = manifest
            .candidates
            .iter()
            .map(|c| c.filename.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["landing-v1.html", "landing-v10.html", "landing-v2.html"]
        );
    }

    #[test]
    fn version_tokens_extracted() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v2.1-final.html", "x", 10);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.candidates[0].version, "2.1-final");
    }

    #[test]
    fn candidate_sizes_recorded() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "12345", 10);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.candidates[0].size, 5);
    }

    #[test]
    fn files_in_subdirectories_are_not_candidates() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "x", 10);
        let nested = tmp.path().join("old");
        fs::create_dir_all(&nested).unwrap();
        write_candidate(&nested, "landing-v9.html", "y", 5);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.candidates.len(), 1);
    }

    #[test]
    fn assets_inventory_counts_recursively() {
        let tmp = site_fixture();
        let config = PublishConfig::default();

        let manifest = scan(&tmp.path().join("website_output"), &config).unwrap();
        let assets = manifest.assets.unwrap();
        assert_eq!(assets.dir_name, "assets");
        assert_eq!(assets.file_count, 3);
        assert!(assets.total_bytes > 0);
    }

    #[test]
    fn no_assets_directory_yields_none() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "landing-v1.html", "x", 10);
        let config = PublishConfig::default();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert!(manifest.assets.is_none());
    }

    #[test]
    fn custom_prefix_respected() {
        let tmp = TempDir::new().unwrap();
        write_candidate(tmp.path(), "ai-productivity-v1.html", "x", 10);
        write_candidate(tmp.path(), "landing-v1.html", "y", 5);
        let config = PublishConfig {
            page_prefix: "ai-productivity-".to_string(),
            ..PublishConfig::default()
        };

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.candidates.len(), 1);
        assert_eq!(
            manifest.selected_candidate().filename,
            "ai-productivity-v1.html"
        );
    }
}
