//! ANSI colored output formatter
//!
//! This module provides colorful terminal output for breadcrumbs, the menu
//! outline and menu diagnostics.

use crate::diagnostics::MenuReport;
use crate::models::{MenuEntry, MenuTree};
use crate::view::BreadcrumbView;

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const BRIGHT_RED: &str = "\x1b[91m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const BRIGHT_WHITE: &str = "\x1b[97m";

const BG_BLUE: &str = "\x1b[44m";

/// Color for a menu entry at `depth`
fn depth_color(depth: usize) -> &'static str {
    match depth {
        1 => BRIGHT_WHITE,
        2 => BRIGHT_CYAN,
        3 => CYAN,
        _ => GREEN,
    }
}

/// Icon for a menu entry
fn entry_icon(entry: &MenuEntry) -> &'static str {
    match (entry.children().is_some(), entry.url.is_some()) {
        (true, _) => "▸",
        (false, true) => "•",
        (false, false) => "◦",
    }
}

/// Format breadcrumb as ANSI, current page highlighted
pub fn format_breadcrumb_ansi(view: &BreadcrumbView) -> String {
    let separator = format!(" {}>{} ", DIM, RESET);
    let mut output = view
        .links
        .iter()
        .map(|link| {
            if link.current {
                format!("{}{}{}{}", BOLD, BRIGHT_GREEN, link.label, RESET)
            } else {
                format!("{}{}{}", CYAN, link.label, RESET)
            }
        })
        .collect::<Vec<_>>()
        .join(separator.as_str());

    if view.trail.is_empty() {
        output.push_str(&format!(" {}(no menu match for '{}'){}", DIM, view.request_path, RESET));
    }

    output
}

/// Format the menu tree as an ANSI outline
pub fn format_menu_ansi(tree: &MenuTree) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{}{}  Site Menu  {}{}\n\n",
        BOLD, BG_BLUE, RESET, RESET
    ));

    for (depth, label, entry) in tree.walk() {
        let indent_str = "   ".repeat(depth);
        let color = depth_color(depth);
        let icon = entry_icon(entry);

        output.push_str(&format!(
            "{}{}{} {}{}{}",
            indent_str,
            color,
            icon,
            BOLD,
            label,
            RESET
        ));

        match entry.url.as_deref() {
            Some(url) if !url.is_empty() => {
                output.push_str(&format!(" {}{}{}", DIM, url, RESET));
            }
            _ => output.push_str(&format!(" {}(no url){}", YELLOW, RESET)),
        }

        output.push('\n');
    }

    output.push_str(&format!(
        "\n{}{} entries{}\n",
        DIM,
        tree.total_entries(),
        RESET
    ));

    output
}

/// Format menu diagnostics as ANSI
pub fn format_report_ansi(report: &MenuReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}Entries:{} {}  {}Depth:{} {}\n",
        BOLD, RESET, report.total_entries, BOLD, RESET, report.max_depth
    ));

    if report.is_clean() {
        output.push_str(&format!("{}✔ no duplicated urls{}\n", BRIGHT_GREEN, RESET));
    }

    for dup in &report.duplicates {
        output.push_str(&format!(
            "{}⚠ /{}{} shared by {} entries\n",
            BRIGHT_RED,
            dup.url,
            RESET,
            dup.entries.len()
        ));
        for (i, entry) in dup.entries.iter().enumerate() {
            let marker = if i == 0 { "resolves here" } else { "shadowed" };
            output.push_str(&format!("   {} {}({}){}\n", entry, DIM, marker, RESET));
        }
    }

    for label in &report.unreachable {
        output.push_str(&format!("{}◦ {}{} {}has no url{}\n", YELLOW, label, RESET, DIM, RESET));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;
    use crate::diagnostics::check_menu;
    use crate::models::{BreadcrumbTrail, Crumb};

    #[test]
    fn test_format_breadcrumb_ansi() {
        let trail = BreadcrumbTrail::from(vec![Crumb::new("Empresa", "/empresa")]);
        let view = BreadcrumbView::build("/empresa", trail, &SiteSettings::default(), None);

        let output = format_breadcrumb_ansi(&view);
        assert!(output.contains("Home"));
        assert!(output.contains(&format!("{}{}Empresa{}", BOLD, BRIGHT_GREEN, RESET)));
    }

    #[test]
    fn test_format_breadcrumb_ansi_without_match() {
        let view = BreadcrumbView::build("/blog", BreadcrumbTrail::empty(), &SiteSettings::default(), None);
        assert!(format_breadcrumb_ansi(&view).contains("no menu match for '/blog'"));
    }

    #[test]
    fn test_format_menu_ansi() {
        let tree = MenuTree::new()
            .with("Empresa", MenuEntry::with_url("/empresa"))
            .with(
                "Serviços",
                MenuEntry::default().with_submenu(MenuTree::new().with("Reparo", MenuEntry::with_url("/reparo"))),
            );

        let output = format_menu_ansi(&tree);
        assert!(output.contains("Site Menu"));
        assert!(output.contains("/empresa"));
        assert!(output.contains("(no url)"));
        assert!(output.contains("3 entries"));
    }

    #[test]
    fn test_entry_icons() {
        assert_eq!(entry_icon(&MenuEntry::with_url("/a")), "•");
        assert_eq!(entry_icon(&MenuEntry::default()), "◦");
        let parent = MenuEntry::default().with_submenu(MenuTree::new().with("x", MenuEntry::default()));
        assert_eq!(entry_icon(&parent), "▸");
    }

    #[test]
    fn test_format_report_ansi() {
        let tree = MenuTree::new()
            .with("A", MenuEntry::with_url("/dup"))
            .with("B", MenuEntry::with_url("dup"));
        let output = format_report_ansi(&check_menu(&tree));

        assert!(output.contains("/dup"));
        assert!(output.contains("resolves here"));
        assert!(output.contains("shadowed"));
    }
}
