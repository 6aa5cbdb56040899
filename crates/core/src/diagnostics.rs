//! Menu diagnostics
//!
//! Reports configuration that resolves in a surprising way: urls shared by
//! several entries (only the first one in a depth-first walk is ever shown in
//! a breadcrumb) and leaf entries that can never be matched.

use crate::models::MenuTree;
use crate::resolver::normalize_path;
use serde::{Deserialize, Serialize};

/// A normalized url carried by more than one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateUrl {
    /// Normalized url
    pub url: String,

    /// Label paths of every entry carrying the url, in traversal order
    pub entries: Vec<String>,
}

impl DuplicateUrl {
    /// The entry breadcrumbs resolve to
    pub fn winner(&self) -> &str {
        self.entries.first().map(String::as_str).unwrap_or("")
    }
}

/// Result of checking a menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuReport {
    /// Entries at every depth
    pub total_entries: usize,

    /// Deepest level (1 = top level only)
    pub max_depth: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicates: Vec<DuplicateUrl>,

    /// Label paths of leaf entries without a usable url
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,
}

impl MenuReport {
    /// No duplicated urls
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Check a menu tree
pub fn check_menu(tree: &MenuTree) -> MenuReport {
    let mut report = MenuReport::default();

    for node in tree.flatten() {
        report.total_entries += 1;
        report.max_depth = report.max_depth.max(node.depth);

        let url = normalize_path(node.entry.url_or_empty());
        if url.is_empty() {
            if node.entry.children().is_none() {
                report.unreachable.push(node.label_path());
            }
            continue;
        }

        match report.duplicates.iter_mut().find(|d| d.url == url) {
            Some(group) => group.entries.push(node.label_path()),
            None => report.duplicates.push(DuplicateUrl {
                url: url.to_string(),
                entries: vec![node.label_path()],
            }),
        }
    }

    report.duplicates.retain(|d| d.entries.len() > 1);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_trail;

    fn menu() -> MenuTree {
        serde_json::from_str(
            r#"{
                "Home": {"url": "/"},
                "Produtos": {
                    "url": "/produtos",
                    "submenu": {
                        "Destaque": {"url": "/produtos/caldeiras"},
                        "Rascunho": {}
                    }
                },
                "Caldeiras": {"url": "produtos/caldeiras/"},
                "Serviços": {"submenu": {"Reparo": {"url": "/reparo"}}}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_report_counts() {
        let report = check_menu(&menu());
        assert_eq!(report.total_entries, 7);
        assert_eq!(report.max_depth, 2);
    }

    #[test]
    fn test_duplicates_name_the_resolved_entry() {
        let tree = menu();
        let report = check_menu(&tree);

        assert!(!report.is_clean());
        assert_eq!(report.duplicates.len(), 1);
        let dup = &report.duplicates[0];
        assert_eq!(dup.url, "produtos/caldeiras");
        assert_eq!(dup.entries, vec!["Produtos > Destaque", "Caldeiras"]);
        assert_eq!(dup.winner(), "Produtos > Destaque");

        let trail = resolve_trail(&tree, "/produtos/caldeiras");
        assert_eq!(trail.current().unwrap().label, "Destaque");
    }

    #[test]
    fn test_unreachable_leaves() {
        let report = check_menu(&menu());
        // "Home" normalizes to empty, "Serviços" has children
        assert_eq!(report.unreachable, vec!["Home", "Produtos > Rascunho"]);
    }

    #[test]
    fn test_empty_menu_is_clean() {
        let report = check_menu(&MenuTree::new());
        assert!(report.is_clean());
        assert_eq!(report.total_entries, 0);
        assert_eq!(report.max_depth, 0);
    }
}
