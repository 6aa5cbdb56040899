//! Data models for menu-driven breadcrumbs
//!
//! This module defines the menu configuration tree (labels mapped to entries,
//! each possibly carrying a nested submenu) and the breadcrumb trail produced
//! from it.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single menu entry
///
/// Only `url` and `submenu` matter to breadcrumb resolution. The remaining
/// fields are display hints carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Site-relative or absolute path of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Icon class or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Image path shown next to the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Render the entry without its label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_label: Option<bool>,

    /// Nested entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<MenuTree>,
}

impl MenuEntry {
    /// Create an entry pointing at `url`
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Attach a submenu (builder pattern)
    pub fn with_submenu(mut self, submenu: MenuTree) -> Self {
        self.submenu = Some(submenu);
        self
    }

    /// Configured url, or the empty string when missing
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Child entries, if any
    pub fn children(&self) -> Option<&MenuTree> {
        self.submenu.as_ref().filter(|s| !s.is_empty())
    }
}

/// A labelled entry inside a [`MenuTree`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display label, unique among its siblings
    pub label: String,

    /// The entry behind the label
    pub entry: MenuEntry,
}

/// Menu configuration: labels mapped to entries, in document order
///
/// Order matters: when two entries share a url, the first one met in a
/// depth-first walk is the one breadcrumbs point at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl MenuTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keeping the position of an existing label
    pub fn insert(&mut self, label: impl Into<String>, entry: MenuEntry) {
        let label = label.into();
        match self.items.iter_mut().find(|item| item.label == label) {
            Some(existing) => existing.entry = entry,
            None => self.items.push(MenuItem { label, entry }),
        }
    }

    /// Add an entry (builder pattern)
    pub fn with(mut self, label: impl Into<String>, entry: MenuEntry) -> Self {
        self.insert(label, entry);
        self
    }

    /// Look up a direct child by label
    pub fn get(&self, label: &str) -> Option<&MenuEntry> {
        self.items
            .iter()
            .find(|item| item.label == label)
            .map(|item| &item.entry)
    }

    /// Iterate direct children in document order
    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flatten the tree depth-first (pre-order) with depth and label path
    pub fn flatten(&self) -> Vec<MenuNode<'_>> {
        let mut nodes = Vec::new();
        collect_nodes(self, &mut Vec::new(), &mut nodes);
        nodes
    }

    /// Walk the tree depth-first (pre-order) as `(depth, label, entry)`
    pub fn walk(&self) -> impl Iterator<Item = (usize, &str, &MenuEntry)> + '_ {
        self.flatten().into_iter().map(|node| {
            let label = node.labels.last().copied().unwrap_or("");
            (node.depth, label, node.entry)
        })
    }

    /// Count every entry at every depth
    pub fn total_entries(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.entry.children().map_or(0, |c| c.total_entries()))
            .sum()
    }
}

fn collect_nodes<'a>(tree: &'a MenuTree, path: &mut Vec<&'a str>, out: &mut Vec<MenuNode<'a>>) {
    for item in tree.iter() {
        path.push(&item.label);
        out.push(MenuNode {
            depth: path.len(),
            labels: path.clone(),
            entry: &item.entry,
        });
        if let Some(children) = item.entry.children() {
            collect_nodes(children, path, out);
        }
        path.pop();
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<(String, MenuEntry)> for MenuTree {
    fn from_iter<I: IntoIterator<Item = (String, MenuEntry)>>(iter: I) -> Self {
        let mut tree = MenuTree::new();
        for (label, entry) in iter {
            tree.insert(label, entry);
        }
        tree
    }
}

impl Serialize for MenuTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(&item.label, &item.entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MenuTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MenuTreeVisitor;

        impl<'de> Visitor<'de> for MenuTreeVisitor {
            type Value = MenuTree;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of menu labels to menu entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MenuTree, A::Error> {
                let mut tree = MenuTree::new();
                while let Some((label, entry)) = access.next_entry::<String, MenuEntry>()? {
                    tree.insert(label, entry);
                }
                Ok(tree)
            }
        }

        deserializer.deserialize_map(MenuTreeVisitor)
    }
}

/// One entry of a flattened [`MenuTree`]
#[derive(Debug, Clone)]
pub struct MenuNode<'a> {
    /// Depth in the tree (1 = top level)
    pub depth: usize,

    /// Labels from the top level down to this entry
    pub labels: Vec<&'a str>,

    /// The entry itself
    pub entry: &'a MenuEntry,
}

impl MenuNode<'_> {
    /// Label of this entry
    pub fn label(&self) -> &str {
        self.labels.last().copied().unwrap_or("")
    }

    /// Label path joined for display
    pub fn label_path(&self) -> String {
        self.labels.join(" > ")
    }
}

/// A single step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Menu label
    pub label: String,

    /// Url as configured (empty when the entry has none)
    pub url: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Breadcrumb trail ordered from the outermost ancestor to the matched entry
///
/// The implicit "Home" step is not part of the trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Crumb>,
}

impl BreadcrumbTrail {
    /// Create an empty trail
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Crumb> {
        self.crumbs.iter()
    }

    /// The matched (innermost) entry
    pub fn current(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }

    /// Labels in trail order
    pub fn labels(&self) -> Vec<&str> {
        self.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Get the formatted path string
    pub fn path(&self) -> String {
        self.labels().join(" > ")
    }

    pub fn as_slice(&self) -> &[Crumb] {
        &self.crumbs
    }
}

impl From<Vec<Crumb>> for BreadcrumbTrail {
    fn from(crumbs: Vec<Crumb>) -> Self {
        Self { crumbs }
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}
