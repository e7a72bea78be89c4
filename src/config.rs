//! Publisher configuration module.
//!
//! Handles loading and validating `config.toml`. The stock defaults reproduce
//! the conventional layout — a `website_output/` export directory published
//! into `docs/` for GitHub Pages — so a config file is only needed when a
//! project deviates from it.
//!
//! ## Config File Location
//!
//! `config.toml` is read from the working directory:
//!
//! ```text
//! my-site/
//! ├── config.toml              # Optional — stock defaults otherwise
//! ├── website_output/          # Versioned exports + assets/
//! │   ├── landing-v1.html
//! │   ├── landing-v2.html
//! │   └── assets/
//! └── docs/                    # Publish target
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "website_output"   # Directory holding versioned exports
//! publish_dir = "docs"            # Directory the site host serves
//! page_prefix = "landing-"        # Candidate pattern: <page_prefix>v<token>.<page_extension>
//! page_extension = "html"
//! entry_name = "index.html"       # Canonical entry document name
//! assets_dir = "assets"           # Assets subtree mirrored alongside the entry
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Publisher configuration loaded from `config.toml`.
///
/// All fields have defaults matching the conventional GitHub Pages layout.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Directory holding versioned landing page exports.
    pub source_dir: String,
    /// Directory the static site host serves from.
    pub publish_dir: String,
    /// Fixed filename prefix before the `v<token>` version marker.
    pub page_prefix: String,
    /// Fixed filename extension (without the leading dot).
    pub page_extension: String,
    /// Canonical name the selected candidate is published under.
    pub entry_name: String,
    /// Name of the assets subtree mirrored next to the entry document.
    pub assets_dir: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            source_dir: "website_output".to_string(),
            publish_dir: "docs".to_string(),
            page_prefix: "landing-".to_string(),
            page_extension: "html".to_string(),
            entry_name: "index.html".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl PublishConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entry_name.is_empty() {
            return Err(ConfigError::Validation(
                "entry_name must not be empty".into(),
            ));
        }
        if self.entry_name.contains('/') || self.entry_name.contains('\\') {
            return Err(ConfigError::Validation(
                "entry_name must be a bare filename, not a path".into(),
            ));
        }
        if self.page_extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "page_extension must not include the leading dot".into(),
            ));
        }
        if self.page_extension.is_empty() {
            return Err(ConfigError::Validation(
                "page_extension must not be empty".into(),
            ));
        }
        if self.assets_dir.is_empty() || self.assets_dir.contains('/') {
            return Err(ConfigError::Validation(
                "assets_dir must be a bare directory name".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `dir/config.toml`, falling back to defaults when
/// the file doesn't exist. The result is validated either way.
pub fn load_config(dir: &Path) -> Result<PublishConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        PublishConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A fully documented stock config, printed by `simple-pub gen-config`.
pub fn stock_config_toml() -> String {
    let defaults = PublishConfig::default();
    format!(
        r#"# simple-pub configuration
# All options are optional - the values below are the defaults.

# Directory holding versioned landing page exports
# (files named <page_prefix>v<token>.<page_extension>).
source_dir = "{source_dir}"

# Directory the static site host serves from (GitHub Pages: docs/).
publish_dir = "{publish_dir}"

# Candidate filename pattern pieces. The publisher matches
# <page_prefix>v<token>.<page_extension>, e.g. landing-v2.html.
page_prefix = "{page_prefix}"
page_extension = "{page_extension}"

# Canonical name the selected candidate is published under.
entry_name = "{entry_name}"

# Assets subtree mirrored next to the entry document. The publish-side
# copy is replaced wholesale on every run - never merged.
assets_dir = "{assets_dir}"
"#,
        source_dir = defaults.source_dir,
        publish_dir = defaults.publish_dir,
        page_prefix = defaults.page_prefix,
        page_extension = defaults.page_extension,
        entry_name = defaults.entry_name,
        assets_dir = defaults.assets_dir,
    )
}
