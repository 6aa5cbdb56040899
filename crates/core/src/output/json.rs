//! JSON output formatter

use crate::output::FormatError;
use crate::view::BreadcrumbView;

/// Format the breadcrumb view as pretty JSON
pub fn format_json(view: &BreadcrumbView) -> Result<String, FormatError> {
    serde_json::to_string_pretty(view).map_err(FormatError::from)
}

/// Format only the structured data block
pub fn format_json_ld(view: &BreadcrumbView) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&view.structured_data).map_err(FormatError::from)
}
