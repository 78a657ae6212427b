use showcase_ui::domain::Demo;
use showcase_ui::domain::config::ThemeConfig;
use showcase_ui::render::{render_document, render_page};

#[test]
fn document_wraps_page_with_head_and_stylesheet() {
    let theme = ThemeConfig::default();
    let doc = render_document(Demo::Gallery, &theme);

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains(r#"<meta charset="utf-8">"#));
    assert!(doc.contains("<title>Showcase · Gallery</title>"));
    assert!(doc.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
    assert!(doc.contains(&render_page(Demo::Gallery)));
    assert!(doc.trim_end().ends_with("</html>"));
}

#[test]
fn custom_stylesheet_is_linked() {
    let theme = ThemeConfig { stylesheet: "/static/site.css".to_owned() };
    let doc = render_document(Demo::Landing, &theme);

    assert!(doc.contains(r#"<link rel="stylesheet" href="/static/site.css">"#));
    assert!(!doc.contains("cdn.tailwindcss.com"));
}
