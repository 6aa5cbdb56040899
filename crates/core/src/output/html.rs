//! HTML fragments
//!
//! Renders the breadcrumb `<nav>` list with the optional page heading and the
//! JSON-LD script block, and the site navigation menu the trail is built from.

use crate::models::{MenuEntry, MenuTree};
use crate::output::FormatError;
use crate::view::BreadcrumbView;

/// Escape text for element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format the breadcrumb view as an HTML fragment
pub fn format_html(view: &BreadcrumbView) -> Result<String, FormatError> {
    let mut output = String::new();

    output.push_str("<div class=\"bread bread--default\" aria-label=\"breadcrumb-wrapper\">\n");
    output.push_str("  <div class=\"wrapper\">\n");
    output.push_str("    <div class=\"bread__row\">\n");
    output.push_str("      <nav aria-label=\"breadcrumb\">\n");
    output.push_str("        <ol id=\"breadcrumb\" class=\"breadcrumb-list\">\n");

    for link in &view.links {
        if link.current {
            output.push_str(&format!(
                "          <li class=\"bread__column active\" aria-current=\"page\">{}</li>\n",
                escape_html(&link.label)
            ));
        } else {
            output.push_str(&format!(
                "          <li class=\"bread__column\"><a href=\"{}\">{}</a></li>\n",
                escape_html(&link.href),
                escape_html(&link.label)
            ));
        }
    }

    output.push_str("        </ol>\n");
    output.push_str("      </nav>\n");

    if let Some(title) = view.title.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!(
            "      <h1 class=\"bread__title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    output.push_str("    </div>\n");
    output.push_str("  </div>\n");

    // `</` inside the JSON would close the script element early
    let json_ld = serde_json::to_string(&view.structured_data)?.replace("</", "<\\/");
    output.push_str(&format!(
        "  <script type=\"application/ld+json\">{}</script>\n",
        json_ld
    ));
    output.push_str("</div>\n");

    Ok(output)
}

/// Urls left to the browser rather than routed inside the site
pub fn is_external(url: &str) -> bool {
    ["http", "mailto:", "tel:", "//"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Href of a menu link: absolute urls kept, relative ones rooted, missing is home
pub fn menu_href(url: Option<&str>) -> String {
    match url {
        None | Some("") => "/".to_string(),
        Some(url) if url.starts_with("http") || url.starts_with('/') => url.to_string(),
        Some(url) => format!("/{}", url),
    }
}

/// Format the menu tree as the site navigation `<nav>`
pub fn format_menu_html(tree: &MenuTree) -> String {
    let mut output = String::new();

    output.push_str("<nav id=\"menu\" aria-label=\"Main menu\">\n");
    output.push_str("  <ul>\n");
    push_menu_items(&mut output, tree, 2);
    output.push_str("  </ul>\n");
    output.push_str("</nav>\n");

    output
}

fn push_menu_items(output: &mut String, tree: &MenuTree, level: usize) {
    let indent = "  ".repeat(level);

    for item in tree {
        let children = item.entry.children();
        match children {
            Some(_) => output.push_str(&format!("{}<li class=\"dropdown\">\n", indent)),
            None => output.push_str(&format!("{}<li>\n", indent)),
        }
        output.push_str(&format!(
            "{}  {}\n",
            indent,
            menu_link(&item.label, &item.entry, children.is_some())
        ));

        if let Some(children) = children {
            output.push_str(&format!(
                "{}  <div class=\"sub-menu\" role=\"menu\" aria-label=\"{} submenu\">\n",
                indent,
                escape_html(&item.label)
            ));
            output.push_str(&format!("{}    <div class=\"sub-menu__items wrapper\">\n", indent));
            output.push_str(&format!("{}      <ul class=\"sub-menu__list\">\n", indent));
            push_menu_items(output, children, level + 4);
            output.push_str(&format!("{}      </ul>\n", indent));

            // first child carrying an image illustrates the whole submenu
            if let Some(image) = children.iter().find_map(|c| c.entry.image.as_deref()) {
                output.push_str(&format!(
                    "{}      <div class=\"sub-menu__image\" aria-hidden=\"true\"><img src=\"{}\" alt=\"{} imagem\"></div>\n",
                    indent,
                    escape_html(image),
                    escape_html(&item.label)
                ));
            }

            output.push_str(&format!("{}    </div>\n", indent));
            output.push_str(&format!("{}  </div>\n", indent));
        }

        output.push_str(&format!("{}</li>\n", indent));
    }
}

fn menu_link(label: &str, entry: &MenuEntry, has_submenu: bool) -> String {
    let href = match entry.url.as_deref() {
        Some(url) if is_external(url) => url.to_string(),
        url => menu_href(url),
    };

    let mut link = format!("<a href=\"{}\"", escape_html(&href));
    if has_submenu {
        link.push_str(" aria-haspopup=\"true\"");
    }
    link.push('>');

    if let Some(icon) = entry.icon.as_deref().filter(|i| !i.is_empty()) {
        link.push_str(&format!("<i class=\"{}\"></i>", escape_html(icon)));
    }
    if !entry.hide_label.unwrap_or(false) {
        link.push_str(&escape_html(label));
    }
    link.push_str("</a>");

    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteSettings;
    use crate::models::{BreadcrumbTrail, Crumb};

    fn view(title: Option<&str>) -> BreadcrumbView {
        let trail = BreadcrumbTrail::from(vec![
            Crumb::new("Produtos & Serviços", "produtos"),
            Crumb::new("<Caldeiras>", "/produtos/caldeiras"),
        ]);
        BreadcrumbView::build("/produtos/caldeiras", trail, &SiteSettings::new("https://x.com"), title)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a & <b> "c" 'd'"#), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
    }

    #[test]
    fn test_format_html_links() {
        let html = format_html(&view(None)).unwrap();

        assert!(html.contains(r#"<li class="bread__column"><a href="/">Home</a></li>"#));
        assert!(html.contains(r#"<a href="/produtos">Produtos &amp; Serviços</a>"#));
        assert!(html.contains(
            r#"<li class="bread__column active" aria-current="page">&lt;Caldeiras&gt;</li>"#
        ));
        assert!(html.contains(r#"<h1 class="bread__title">&lt;Caldeiras&gt;</h1>"#));
        assert!(html.contains(r#"<script type="application/ld+json">{"@context":"https://schema.org""#));
    }

    #[test]
    fn test_format_html_without_title() {
        let empty = BreadcrumbView::build("/", BreadcrumbTrail::empty(), &SiteSettings::default(), None);
        let html = format_html(&empty).unwrap();

        assert!(!html.contains("<h1"));
        assert!(!html.contains("aria-current"));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
    }

    #[test]
    fn test_format_html_empty_title_has_no_heading() {
        let trail = BreadcrumbTrail::from(vec![Crumb::new("Empresa", "/empresa")]);
        let view = BreadcrumbView::build("/empresa", trail, &SiteSettings::default(), Some(""));
        let html = format_html(&view).unwrap();

        assert!(!html.contains("<h1"));
        assert!(html.contains(r#"aria-current="page">Empresa</li>"#));

        let mut view = view;
        view.title = Some(String::new());
        assert!(!format_html(&view).unwrap().contains("<h1"));
    }

    fn nav_menu() -> MenuTree {
        serde_json::from_str(
            r#"{
                "Home": {"url": "/", "icon": "fas fa-home", "hideLabel": true},
                "Produtos": {
                    "url": "produtos",
                    "submenu": {
                        "Caldeiras": {"url": "/produtos/caldeiras"},
                        "Queimadores": {"url": "produtos/queimadores", "image": "/img/queimador.png"},
                        "Fornos": {"url": "/produtos/fornos", "image": "/img/forno.png"}
                    }
                },
                "Loja": {"url": "https://loja.example.com"},
                "Fale": {"url": "tel:+551199999999", "icon": "fas fa-phone"},
                "Sem link": {}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_menu_href() {
        assert_eq!(menu_href(None), "/");
        assert_eq!(menu_href(Some("")), "/");
        assert_eq!(menu_href(Some("/empresa")), "/empresa");
        assert_eq!(menu_href(Some("empresa")), "/empresa");
        assert_eq!(menu_href(Some("https://x.com/a")), "https://x.com/a");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://x.com"));
        assert!(is_external("mailto:a@x.com"));
        assert!(is_external("tel:+5511"));
        assert!(is_external("//cdn.x.com"));
        assert!(!is_external("/empresa"));
        assert!(!is_external("empresa"));
    }

    #[test]
    fn test_menu_html_hide_label_keeps_icon() {
        let html = format_menu_html(&nav_menu());

        assert!(html.starts_with("<nav id=\"menu\" aria-label=\"Main menu\">"));
        assert!(html.contains(r#"<li>
      <a href="/"><i class="fas fa-home"></i></a>"#));
        assert!(!html.contains(">Home<"));
        assert!(html.contains(r#"<a href="tel:+551199999999"><i class="fas fa-phone"></i>Fale</a>"#));
    }

    #[test]
    fn test_menu_html_links() {
        let html = format_menu_html(&nav_menu());

        assert!(html.contains(r#"<a href="https://loja.example.com">Loja</a>"#));
        assert!(html.contains(r#"<a href="/produtos/queimadores">Queimadores</a>"#));
        assert!(html.contains(r#"<a href="/">Sem link</a>"#));
    }

    #[test]
    fn test_menu_html_submenu_shows_first_child_image() {
        let html = format_menu_html(&nav_menu());

        assert!(html.contains(r#"<li class="dropdown">"#));
        assert!(html.contains(r#"<a href="/produtos" aria-haspopup="true">Produtos</a>"#));
        assert!(html.contains(r#"<div class="sub-menu" role="menu" aria-label="Produtos submenu">"#));
        assert!(html.contains(r#"<ul class="sub-menu__list">"#));
        assert!(html.contains(
            r#"<div class="sub-menu__image" aria-hidden="true"><img src="/img/queimador.png" alt="Produtos imagem"></div>"#
        ));
        assert!(!html.contains("forno.png"));
        assert_eq!(html.matches("<li class=\"dropdown\">").count(), 1);
    }

    #[test]
    fn test_menu_html_escapes_labels() {
        let tree = MenuTree::new().with("P&D <novo>", MenuEntry::with_url("/p\"d"));
        let html = format_menu_html(&tree);

        assert!(html.contains(r#"<a href="/p&quot;d">P&amp;D &lt;novo&gt;</a>"#));
    }

    #[test]
    fn test_script_block_cannot_be_closed_by_labels() {
        let trail = BreadcrumbTrail::from(vec![Crumb::new("</script>", "/x")]);
        let view = BreadcrumbView::build("/x", trail, &SiteSettings::default(), None);
        let html = format_html(&view).unwrap();

        assert_eq!(html.matches("</script>").count(), 1);
    }
}
