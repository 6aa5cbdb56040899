//! Breadcrumb resolution
//!
//! Maps a request path to the chain of menu entries leading to it. When the
//! full path is not a menu entry, trailing segments are dropped one at a time
//! until some prefix is, so detail pages under a listed route still get the
//! trail of their nearest known ancestor.

use crate::models::{BreadcrumbTrail, Crumb, MenuTree};
use tracing::debug;

/// Strip leading and trailing `/` separators
pub fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a request path into its normalized segments
///
/// The home path (empty, or only separators) has no segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    let cleaned = normalize_path(path);
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned.split('/').collect()
}

/// Resolve the breadcrumb trail for `request_path`
///
/// Tries the full path first, then progressively shorter prefixes, and
/// returns the trail of the first prefix that matches an entry anywhere in
/// the tree. An empty trail means the home page or no match at all.
pub fn resolve_trail(tree: &MenuTree, request_path: &str) -> BreadcrumbTrail {
    let segments = path_segments(request_path);
    if segments.is_empty() {
        debug!(path = request_path, "home path, no breadcrumb");
        return BreadcrumbTrail::empty();
    }

    for len in (1..=segments.len()).rev() {
        let candidate = segments[..len].join("/");
        if let Some(trail) = find_trail(tree, &candidate) {
            debug!(
                path = request_path,
                matched = %candidate,
                depth = trail.len(),
                "breadcrumb resolved"
            );
            return trail;
        }
    }

    debug!(path = request_path, "no menu entry matches any prefix");
    BreadcrumbTrail::empty()
}

/// Find the trail for an already normalized `target`
///
/// Depth-first in document order; an entry is checked before its submenu,
/// so the first entry carrying a duplicated url wins.
pub fn find_trail(tree: &MenuTree, target: &str) -> Option<BreadcrumbTrail> {
    if target.is_empty() {
        return None;
    }

    let mut crumbs = Vec::new();
    if search(tree, target, &mut crumbs) {
        // collected leaf first
        crumbs.reverse();
        Some(BreadcrumbTrail::from(crumbs))
    } else {
        None
    }
}

fn search(tree: &MenuTree, target: &str, crumbs: &mut Vec<Crumb>) -> bool {
    for item in tree {
        let url = item.entry.url_or_empty();
        if normalize_path(url) == target {
            crumbs.push(Crumb::new(item.label.as_str(), url));
            return true;
        }
        if let Some(children) = item.entry.children() {
            if search(children, target, crumbs) {
                crumbs.push(Crumb::new(item.label.as_str(), url));
                return true;
            }
        }
    }
    false
}
