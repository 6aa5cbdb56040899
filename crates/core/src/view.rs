//! Breadcrumb view model
//!
//! Turns a resolved trail into what a page renders: the Home link, one link
//! per crumb with the last one marked as the current page, the page title and
//! the structured data block.

use crate::config::SiteSettings;
use crate::jsonld::{structured_data, BreadcrumbList};
use crate::models::BreadcrumbTrail;
use crate::resolver::normalize_path;
use serde::{Deserialize, Serialize};

/// A rendered breadcrumb link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbLink {
    pub label: String,

    /// Site-relative href
    pub href: String,

    /// The current page; rendered as text rather than a link
    #[serde(default)]
    pub current: bool,
}

/// Site-relative href for a configured url
pub fn link_href(url: &str) -> String {
    if url.is_empty() {
        "/".to_string()
    } else if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{}", normalize_path(url))
    }
}

/// Everything a page needs to show its breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbView {
    /// Request path the trail was resolved for
    pub request_path: String,

    /// Resolved trail, without Home
    pub trail: BreadcrumbTrail,

    /// Home followed by the trail
    pub links: Vec<BreadcrumbLink>,

    /// Page heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// schema.org `BreadcrumbList`
    pub structured_data: BreadcrumbList,
}

impl BreadcrumbView {
    /// Build the view for a resolved trail
    ///
    /// An explicit `title` wins over the label of the current page. An empty
    /// title means no heading at all.
    pub fn build(
        request_path: &str,
        trail: BreadcrumbTrail,
        settings: &SiteSettings,
        title: Option<&str>,
    ) -> Self {
        let mut links = Vec::with_capacity(trail.len() + 1);
        links.push(BreadcrumbLink {
            label: settings.home_label.clone(),
            href: "/".to_string(),
            current: false,
        });

        let last = trail.len().saturating_sub(1);
        links.extend(trail.iter().enumerate().map(|(i, crumb)| BreadcrumbLink {
            label: crumb.label.clone(),
            href: link_href(&crumb.url),
            current: i == last,
        }));

        let title = title
            .map(str::to_string)
            .or_else(|| trail.current().map(|c| c.label.clone()))
            .filter(|t| !t.is_empty());

        let structured_data = structured_data(&trail, settings);

        Self {
            request_path: request_path.to_string(),
            trail,
            links,
            title,
            structured_data,
        }
    }

    /// The link marked as current page, if the trail is not empty
    pub fn current(&self) -> Option<&BreadcrumbLink> {
        self.links.iter().find(|l| l.current)
    }

    /// Labels joined for display, Home included
    pub fn path(&self) -> String {
        self.links
            .iter()
            .map(|l| l.label.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}
