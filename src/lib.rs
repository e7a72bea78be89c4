//! # Simple Pub
//!
//! A minimal publisher for versioned static landing pages. Your filesystem is
//! the release pipeline: page exports are versioned by filename
//! (`landing-v1.html`, `landing-v2.html`, …), and publishing means installing
//! the most recently modified one as `index.html` in the directory your
//! static site host serves, with the `assets/` subtree mirrored alongside.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      website_output/  →  Manifest          (filesystem → structured data)
//! 2. Publish   Manifest         →  docs/             (entry document + assets mirror)
//! ```
//!
//! The stages are separate so each is independently testable and inspectable:
//! `scan` is read-only and can run on its own (`simple-pub scan`) to show
//! exactly which candidate would be published and why, before anything is
//! written. `publish` is a pure function of the manifest plus the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — validates the source, enumerates candidates, selects by mtime, inventories assets |
//! | [`publish`] | Stage 2 — creates the publish directory, installs the entry document, mirrors assets |
//! | [`config`] | `config.toml` loading and validation with stock defaults |
//! | [`naming`] | `<prefix>v<token>.<ext>` candidate filename parser |
//! | [`types`] | Shared serializable types (`Candidate`, `AssetsInfo`, `PublishSummary`) |
//! | [`output`] | CLI output formatting — candidate inventory and publish report |
//!
//! # Design Decisions
//!
//! ## Modification Time Selects, Version Tokens Don't
//!
//! The "latest" candidate is the one with the newest filesystem mtime, never
//! the one with the highest version token. Tokens are free-form strings with
//! no defined ordering, and the workflow this serves — export, eyeball,
//! publish — means the file you just saved is the one you want. The two
//! orderings can disagree (a `-v3` restored from an old checkout loses to a
//! freshly touched `-v2`); the scan output prints every candidate's mtime so
//! the pick is always explainable. Ties are broken by filename for
//! determinism.
//!
//! ## Replace-Don't-Merge Assets
//!
//! `docs/assets` is deleted and recreated from the source on every publish.
//! Merging would leave files removed from the source serving forever; exact
//! mirroring is worth losing anything hand-placed under the published assets
//! directory. The delete and recreate are two plain filesystem steps with no
//! rollback — a failure in between leaves the subtree absent until the next
//! successful run.
//!
//! ## Fail Early, Write Nothing
//!
//! Scanning runs before any write. A missing source directory or an empty
//! candidate set aborts the run with the publish directory untouched, and the
//! process exits non-zero so scripts can gate the git push on success.
//!
//! ## Paths Are Configuration
//!
//! `website_output/` and `docs/` are defaults, not constants. `config.toml`
//! (and `--source`/`--output` flags) relocate everything, including the
//! candidate pattern pieces, so one binary serves any project layout.

pub mod config;
pub mod naming;
pub mod output;
pub mod publish;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
