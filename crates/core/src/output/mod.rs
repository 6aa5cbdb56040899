//! Output formatting module
//!
//! This module provides formatters for JSON, YAML, ANSI, plain text, JSON-LD
//! and HTML output of breadcrumb views, plus menu outlines and diagnostics.

pub mod ansi;
pub mod html;
mod json;
mod yaml;

pub use ansi::{format_breadcrumb_ansi, format_menu_ansi, format_report_ansi};
pub use html::{escape_html, format_html, format_menu_html};
pub use json::{format_json, format_json_ld};
pub use yaml::format_yaml;

use crate::diagnostics::MenuReport;
use crate::models::MenuTree;
use crate::view::BreadcrumbView;
use thiserror::Error;

/// Output format errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Formatting error: {0}")]
    FormattingError(String),
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format
    #[default]
    Json,
    /// YAML format
    Yaml,
    /// ANSI colored text
    Ansi,
    /// Plain text summary
    Summary,
    /// schema.org BreadcrumbList
    JsonLd,
    /// Breadcrumb nav fragment
    Html,
}

/// Format a breadcrumb view in the specified format
pub fn format_output(view: &BreadcrumbView, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => format_json(view),
        OutputFormat::Yaml => format_yaml(view),
        OutputFormat::Ansi => Ok(format_breadcrumb_ansi(view)),
        OutputFormat::Summary => Ok(view.path()),
        OutputFormat::JsonLd => format_json_ld(view),
        OutputFormat::Html => format_html(view),
    }
}

/// Format the menu tree
pub fn format_menu(tree: &MenuTree, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(tree).map_err(FormatError::from),
        OutputFormat::Yaml => serde_yaml::to_string(tree).map_err(FormatError::from),
        OutputFormat::Ansi => Ok(format_menu_ansi(tree)),
        OutputFormat::Summary => Ok(format_menu_summary(tree)),
        OutputFormat::Html => Ok(format_menu_html(tree)),
        other => Err(FormatError::FormattingError(format!(
            "{:?} output is only available for breadcrumbs",
            other
        ))),
    }
}

/// Format menu diagnostics
pub fn format_report(report: &MenuReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(FormatError::from),
        OutputFormat::Yaml => serde_yaml::to_string(report).map_err(FormatError::from),
        OutputFormat::Ansi => Ok(format_report_ansi(report)),
        OutputFormat::Summary => Ok(format_report_summary(report)),
        other => Err(FormatError::FormattingError(format!(
            "{:?} output is only available for breadcrumbs",
            other
        ))),
    }
}

/// Format the menu tree as an indented plain outline
fn format_menu_summary(tree: &MenuTree) -> String {
    let mut output = String::new();

    for (depth, label, entry) in tree.walk() {
        let indent_str = "  ".repeat(depth - 1);
        match entry.url.as_deref() {
            Some(url) if !url.is_empty() => {
                output.push_str(&format!("{}{} ({})\n", indent_str, label, url))
            }
            _ => output.push_str(&format!("{}{}\n", indent_str, label)),
        }
    }

    output
}

/// Format menu diagnostics as plain text
fn format_report_summary(report: &MenuReport) -> String {
    let mut output = String::new();

    output.push_str("Menu Check\n");
    output.push_str("==========\n\n");
    output.push_str(&format!("Entries: {}\n", report.total_entries));
    output.push_str(&format!("Max Depth: {}\n", report.max_depth));

    if !report.duplicates.is_empty() {
        output.push_str(&format!("\nDuplicated urls: {}\n", report.duplicates.len()));
        for dup in &report.duplicates {
            output.push_str(&format!("  /{} -> {}\n", dup.url, dup.winner()));
            for shadowed in dup.entries.iter().skip(1) {
                output.push_str(&format!("    shadowed: {}\n", shadowed));
            }
        }
    }

    if !report.unreachable.is_empty() {
        output.push_str(&format!("\nEntries without url: {}\n", report.unreachable.len()));
        for label in &report.unreachable {
            output.push_str(&format!("  {}\n", label));
        }
    }

    output
}
