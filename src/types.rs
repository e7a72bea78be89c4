//! Shared types used across both pipeline stages.
//!
//! Scan produces them, publish consumes and extends them, and the `--json`
//! output mode serializes them verbatim — so they live in one place.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A file in the source directory matching the candidate naming pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Bare filename inside the source directory.
    pub filename: String,
    /// Version token parsed from the filename. Display only — selection
    /// never compares tokens.
    pub version: String,
    /// Filesystem modification time. The selection key.
    pub modified: SystemTime,
    /// File size in bytes.
    pub size: u64,
}

/// Inventory of the optional assets subtree under the source directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsInfo {
    /// Subtree name (`assets` unless reconfigured).
    pub dir_name: String,
    /// Number of files in the subtree, recursively.
    pub file_count: usize,
    /// Total size of all files in bytes.
    pub total_bytes: u64,
}

/// Result of a publish run, reported to the operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSummary {
    /// Filename of the candidate that was published.
    pub selected: String,
    /// How many candidates were considered.
    pub candidate_count: usize,
    /// Resolved path of the published entry document.
    pub entry_path: String,
    /// Assets inventory when the subtree was mirrored, `None` when the
    /// source had no assets directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<AssetsInfo>,
}
