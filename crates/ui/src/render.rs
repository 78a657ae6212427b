//! Static pre-rendering of the demo pages.

use crate::pages;
use dioxus::prelude::VirtualDom;
use showcase_domain::Demo;
use showcase_domain::config::ThemeConfig;
use tracing::debug;

/// Renders the body markup of `demo`.
///
/// Every call builds a fresh [`VirtualDom`], so identical inputs give identical output.
#[must_use]
pub fn render_page(demo: Demo) -> String {
    let mut dom = VirtualDom::new(pages::root(demo));
    dom.rebuild_in_place();

    let html = dioxus_ssr::render(&dom);
    debug!(demo = %demo, bytes = html.len(), "Rendered page");
    html
}

/// Tag that loads the utility-class stylesheet.
///
/// URLs ending in `.css` become a `<link>`; anything else (the Tailwind play CDN) a `<script>`.
#[must_use]
pub fn stylesheet_tag(stylesheet: &str) -> String {
    let href = escape_attribute(stylesheet);
    if stylesheet.ends_with(".css") {
        format!(r#"<link rel="stylesheet" href="{href}">"#)
    } else {
        format!(r#"<script src="{href}"></script>"#)
    }
}

/// Extra `<head>` content shared by the exported documents and the desktop window.
#[must_use]
pub fn head_extras(theme: &ThemeConfig) -> String {
    format!(
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">{}"#,
        stylesheet_tag(&theme.stylesheet)
    )
}

/// Renders `demo` as a standalone HTML5 document.
#[must_use]
pub fn render_document(demo: Demo, theme: &ThemeConfig) -> String {
    let body = render_page(demo);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n{head}\n</head>\n<body>\n<div id=\"main\">{body}</div>\n</body>\n</html>\n",
        title = demo.title(),
        head = head_extras(theme),
    )
}

/// Escapes a value for a double-quoted `href`/`src` attribute; not for text content.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
