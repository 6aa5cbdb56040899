//! Configuration module for breadcrumb resolution
//!
//! This module loads the static menu configuration (JSON or YAML) and holds
//! the site settings used to turn trails into links and structured data.

use crate::models::MenuTree;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default origin used when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Default label of the implicit first breadcrumb
pub const DEFAULT_HOME_LABEL: &str = "Home";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON menu: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid YAML menu: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Menu document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Yaml,
}

impl MenuFormat {
    /// Determine format from file extension
    ///
    /// Anything that is not `yaml`/`yml` is read as JSON.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => MenuFormat::Yaml,
            _ => MenuFormat::Json,
        }
    }

    /// Determine format from a file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .map(|ext| Self::from_extension(&ext.to_string_lossy()))
            .unwrap_or(MenuFormat::Json)
    }
}

/// Site-wide settings for rendering breadcrumbs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Scheme and host, used to fully qualify structured data urls
    pub origin: String,

    /// Label of the implicit first breadcrumb
    pub home_label: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Create settings for `origin`
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }

    /// Set origin (builder pattern)
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set home label (builder pattern)
    pub fn with_home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = label.into();
        self
    }

    /// Origin without trailing separators
    pub fn origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }

    /// Check the settings can produce absolute urls
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origin = self.origin();
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(ConfigError::InvalidConfig(format!(
                "origin must start with http:// or https://, got '{}'",
                self.origin
            )));
        }
        if self.home_label.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "home label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a menu document
pub fn parse_menu(source: &str, format: MenuFormat) -> Result<MenuTree, ConfigError> {
    let tree = match format {
        MenuFormat::Json => serde_json::from_str(source)?,
        MenuFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(tree)
}

/// Load a menu file, choosing the format from its extension
pub fn load_menu(path: &Path) -> Result<MenuTree, ConfigError> {
    let source = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    let tree = parse_menu(&source, MenuFormat::from_path(path))?;
    info!(
        path = %path.display(),
        entries = tree.total_entries(),
        "menu loaded"
    );
    Ok(tree)
}
