//! site_breadcrumbs_core - Core library for menu-driven breadcrumbs
//!
//! This crate resolves the breadcrumb trail of a website page from the
//! static menu configuration the site navigation is built from.
//!
//! # Features
//!
//! - **Longest-prefix Resolution**: Pages that are not menu entries get the
//!   trail of their nearest ancestor route.
//! - **Ordered Menus**: JSON and YAML menus keep document order, which
//!   decides between entries that share a url.
//! - **Breadcrumb Views**: Home link, current page marker and page title.
//! - **Structured Data**: schema.org `BreadcrumbList` JSON-LD.
//! - **Multiple Output Formats**: JSON, YAML, ANSI, plain text and HTML.
//!
//! # Example
//!
//! ```rust,no_run
//! use site_breadcrumbs_core::{BreadcrumbEngine, SiteSettings, OutputFormat, format_output};
//! use std::path::Path;
//!
//! let settings = SiteSettings::new("https://www.example.com");
//! let engine = BreadcrumbEngine::from_file(Path::new("items-menu.json"), settings).unwrap();
//!
//! let view = engine.view("/produtos/caldeiras", None);
//! let html = format_output(&view, OutputFormat::Html).unwrap();
//! println!("{}", html);
//! ```

pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod jsonld;
pub mod models;
pub mod output;
pub mod resolver;
pub mod view;

// Re-exports for convenience
pub use config::{load_menu, parse_menu, ConfigError, MenuFormat, SiteSettings};
pub use diagnostics::{check_menu, DuplicateUrl, MenuReport};
pub use engine::BreadcrumbEngine;
pub use jsonld::{structured_data, BreadcrumbList, ListItem};
pub use models::{BreadcrumbTrail, Crumb, MenuEntry, MenuItem, MenuNode, MenuTree};
pub use output::{format_menu, format_output, format_report, FormatError, OutputFormat};
pub use resolver::{find_trail, normalize_path, path_segments, resolve_trail};
pub use view::{link_href, BreadcrumbLink, BreadcrumbView};
