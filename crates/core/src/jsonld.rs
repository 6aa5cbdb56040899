//! schema.org `BreadcrumbList` structured data

use crate::config::SiteSettings;
use crate::models::BreadcrumbTrail;
use crate::resolver::normalize_path;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A `BreadcrumbList` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "@type")]
    pub kind: String,

    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// One position of a `BreadcrumbList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: String,

    /// 1-based; Home is always 1
    pub position: usize,

    pub name: String,

    /// Fully qualified url
    pub item: String,
}

impl ListItem {
    fn new(position: usize, name: impl Into<String>, item: String) -> Self {
        Self {
            kind: "ListItem".to_string(),
            position,
            name: name.into(),
            item,
        }
    }
}

/// Fully qualify a configured url against `origin`
pub fn absolute_url(origin: &str, url: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", origin, url)
    } else {
        format!("{}/{}", origin, normalize_path(url))
    }
}

/// Build the structured data for a trail, Home first
pub fn structured_data(trail: &BreadcrumbTrail, settings: &SiteSettings) -> BreadcrumbList {
    let origin = settings.origin();

    let mut items = Vec::with_capacity(trail.len() + 1);
    items.push(ListItem::new(1, settings.home_label.as_str(), format!("{}/", origin)));
    items.extend(
        trail
            .iter()
            .enumerate()
            .map(|(i, crumb)| ListItem::new(i + 2, crumb.label.as_str(), absolute_url(origin, &crumb.url))),
    );

    BreadcrumbList {
        context: SCHEMA_CONTEXT.to_string(),
        kind: "BreadcrumbList".to_string(),
        item_list_element: items,
    }
}
