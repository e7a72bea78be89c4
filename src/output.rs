//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**: each candidate leads
//! with its positional index and filename, with version token, modification
//! time, and size as indented context lines. The modification time is shown
//! for every candidate because it is the selection key — when the pick looks
//! surprising (a lower version token winning), the listing explains why.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Source: website_output
//!
//! Candidates
//!     001 landing-v1.html
//!         Version: 1
//!         Modified: 2026-08-12 10:15
//!         Size: 14.2 KB
//!     002 landing-v2.html (selected)
//!         Version: 2
//!         Modified: 2026-08-27 09:03
//!         Size: 15.1 KB
//!
//! Assets
//!     assets/ (3 files, 54.0 KB)
//! ```
//!
//! ## Publish
//!
//! ```text
//! landing-v2.html → docs/index.html
//! assets/ → docs/assets/ (3 files)
//!
//! Published latest of 2 candidates
//!
//! Next steps:
//!     1. Preview locally: open docs/index.html in a browser
//!     2. Commit and push:
//!          git add docs/
//!          git commit -m "Update landing page"
//!          git push
//!     3. The site refreshes a minute or two after push
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::Manifest;
use crate::types::PublishSummary;
use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Render an mtime as local wall-clock time, minute precision.
fn format_mtime(t: SystemTime) -> String {
    DateTime::<Local>::from(t)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Human-readable byte count: `742 B`, `14.2 KB`, `3.1 MB`.
fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the candidate inventory.
///
/// The selected candidate is marked inline; every candidate shows the
/// modification time that drove (or lost) the selection.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Source: {}", manifest.source));
    lines.push(String::new());
    lines.push("Candidates".to_string());

    for (i, candidate) in manifest.candidates.iter().enumerate() {
        let marker = if i == manifest.selected {
            " (selected)"
        } else {
            ""
        };
        lines.push(format!(
            "    {} {}{}",
            format_index(i + 1),
            candidate.filename,
            marker
        ));
        if !candidate.version.is_empty() {
            lines.push(format!("        Version: {}", candidate.version));
        }
        lines.push(format!(
            "        Modified: {}",
            format_mtime(candidate.modified)
        ));
        lines.push(format!("        Size: {}", human_size(candidate.size)));
    }

    if let Some(assets) = &manifest.assets {
        lines.push(String::new());
        lines.push("Assets".to_string());
        lines.push(format!(
            "    {}/ ({} files, {})",
            assets.dir_name,
            assets.file_count,
            human_size(assets.total_bytes)
        ));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Publish output
// ============================================================================

/// Format publish stage output: what landed where, then operator next steps.
///
/// The next steps are informational only — simple-pub never runs git itself.
pub fn format_publish_output(summary: &PublishSummary) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} \u{2192} {}",
        summary.selected, summary.entry_path
    ));

    let publish_dir = Path::new(&summary.entry_path)
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if let Some(assets) = &summary.assets {
        lines.push(format!(
            "{dir}/ \u{2192} {publish_dir}/{dir}/ ({count} files)",
            dir = assets.dir_name,
            count = assets.file_count,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Published latest of {} candidate{}",
        summary.candidate_count,
        if summary.candidate_count == 1 { "" } else { "s" }
    ));

    lines.push(String::new());
    lines.push("Next steps:".to_string());
    lines.push(format!(
        "    1. Preview locally: open {} in a browser",
        summary.entry_path
    ));
    lines.push("    2. Commit and push:".to_string());
    lines.push(format!("         git add {publish_dir}/"));
    lines.push("         git commit -m \"Update landing page\"".to_string());
    lines.push("         git push".to_string());
    lines.push("    3. The site refreshes a minute or two after push".to_string());

    lines
}

/// Print publish output to stdout.
pub fn print_publish_output(summary: &PublishSummary) {
    for line in format_publish_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
