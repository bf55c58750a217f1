//! Builder configuration module.
//!
//! Handles loading and validating `config.toml` from the content root. All
//! keys are optional; defaults match the conventions the extractor and
//! timeline consumer were built around.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title-class = "blog-builder-title"      # CSS class marking the post title
//! teaser-class = "blog-builder-teaser"    # CSS class marking the teaser
//! tag-class = "blog-builder-tag"          # CSS class marking each tag
//! metadata-file = "blog-builder-metadata.json"  # Sidecar cache file name
//!
//! # Page capacity for timeline output. When absent, pages never auto-flush
//! # on size and only the end-of-walk flush produces output.
//! posts-per-page = 10
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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

/// Builder configuration loaded from `config.toml`.
///
/// All fields have defaults; user config files need only specify the values
/// they want to override. Keys use kebab-case on disk (`title-class`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BuilderConfig {
    /// CSS class identifying the post title element.
    pub title_class: String,
    /// CSS class identifying the post teaser element.
    pub teaser_class: String,
    /// CSS class identifying tag elements (all occurrences are collected).
    pub tag_class: String,
    /// File name of the per-directory metadata sidecar.
    pub metadata_file: String,
    /// Page capacity for the timeline consumer. `None` disables
    /// size-triggered page writes.
    pub posts_per_page: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            title_class: "blog-builder-title".to_string(),
            teaser_class: "blog-builder-teaser".to_string(),
            tag_class: "blog-builder-tag".to_string(),
            metadata_file: "blog-builder-metadata.json".to_string(),
            posts_per_page: None,
        }
    }
}

impl BuilderConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("title-class", &self.title_class),
            ("teaser-class", &self.teaser_class),
            ("tag-class", &self.tag_class),
            ("metadata-file", &self.metadata_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key} must not be empty"
                )));
            }
        }
        if self.posts_per_page == Some(0) {
            return Err(ConfigError::Validation(
                "posts-per-page must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate the builder config for a content root.
///
/// Reads `<root>/config.toml` when present; falls back to defaults when the
/// file doesn't exist. A file that exists but fails to parse or validate is
/// an error.
pub fn load_config(root: &Path) -> Result<BuilderConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        BuilderConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys documented.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Blog Builder Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of your posts directory, next to the dated
# post directories (251013-some-description/, ...).
# Unknown keys will cause an error.

# CSS class marking the post title element in each index.html.
# The first matching element wins; its trimmed text becomes the title.
title-class = "blog-builder-title"

# CSS class marking the teaser element. Same first-match rule as the title.
teaser-class = "blog-builder-teaser"

# CSS class marking tag elements. Every matching element contributes one
# tag, in document order.
tag-class = "blog-builder-tag"

# File name for the per-directory metadata sidecar. A directory that
# already contains this file is skipped on re-runs.
metadata-file = "blog-builder-metadata.json"

# Page capacity for timeline output files. When set, a page is written the
# moment it fills; the remainder is written at the end of the walk.
# When omitted, all posts land in a single page at the end of the walk.
#posts-per-page = 10
"##
}
