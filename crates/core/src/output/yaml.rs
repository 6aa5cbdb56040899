//! YAML output formatter

use crate::output::FormatError;
use crate::view::BreadcrumbView;

/// Format the breadcrumb view as YAML
pub fn format_yaml(view: &BreadcrumbView) -> Result<String, FormatError> {
    serde_yaml::to_string(view).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;
    use crate::models::{BreadcrumbTrail, Crumb};

    #[test]
    fn test_format_yaml() {
        let trail = BreadcrumbTrail::from(vec![
            Crumb::new("Produtos", "/produtos"),
            Crumb::new("Caldeiras", "/produtos/caldeiras"),
        ]);
        let view = BreadcrumbView::build("/produtos/caldeiras", trail, &SiteSettings::default(), None);

        let yaml = format_yaml(&view).unwrap();
        assert!(yaml.contains("request_path: /produtos/caldeiras"));
        assert!(yaml.contains("trail:"));
        assert!(yaml.contains("Caldeiras"));
    }
}
