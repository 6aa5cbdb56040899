//! Breadcrumb engine module
//!
//! Owns the menu loaded once at start-up together with the site settings and
//! hands out trails and views per request path.

use crate::config::{load_menu, ConfigError, SiteSettings};
use crate::diagnostics::{check_menu, MenuReport};
use crate::models::{BreadcrumbTrail, MenuTree};
use crate::resolver::resolve_trail;
use crate::view::BreadcrumbView;
use std::path::Path;
use tracing::warn;

/// Menu and settings for one site
#[derive(Debug, Clone)]
pub struct BreadcrumbEngine {
    menu: MenuTree,
    settings: SiteSettings,
}

impl BreadcrumbEngine {
    /// Create an engine over an already loaded menu
    pub fn new(menu: MenuTree, settings: SiteSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let report = check_menu(&menu);
        for dup in &report.duplicates {
            warn!(
                url = %dup.url,
                entries = dup.entries.len(),
                resolves_to = dup.winner(),
                "menu url shared by several entries"
            );
        }

        Ok(Self { menu, settings })
    }

    /// Load the menu file and create an engine
    pub fn from_file(path: &Path, settings: SiteSettings) -> Result<Self, ConfigError> {
        let menu = load_menu(path)?;
        Self::new(menu, settings)
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Trail for `request_path`
    pub fn resolve(&self, request_path: &str) -> BreadcrumbTrail {
        resolve_trail(&self.menu, request_path)
    }

    /// Full breadcrumb view for `request_path`
    pub fn view(&self, request_path: &str, title: Option<&str>) -> BreadcrumbView {
        let trail = self.resolve(request_path);
        BreadcrumbView::build(request_path, trail, &self.settings, title)
    }

    /// Diagnostics for the loaded menu
    pub fn check(&self) -> MenuReport {
        check_menu(&self.menu)
    }
}
