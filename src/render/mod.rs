//! HTML Rendering
//!
//! Building blocks the views assemble pages from:
//!
//! - **background**: image embedding and full-page background directives
//! - **chart**: inline SVG line chart
//! - **styles**: static page chrome CSS
//!
//! A `Page` is a complete, self-contained HTML document: styles are inlined
//! and images are embedded as data URLs.

pub mod background;
pub mod chart;
pub mod styles;

pub use background::{
    image_data_url, normalize_format, render_background, ImageSource, StyleDirective,
};
pub use chart::line_chart;

/// A rendered page: title, style directives and body markup
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: String,
    styles: Vec<StyleDirective>,
    body: String,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            styles: Vec::new(),
            body: String::new(),
        }
    }

    /// Add a style directive; later directives win on conflicts
    pub fn style(&mut self, directive: StyleDirective) {
        self.styles.push(directive);
    }

    /// Append raw markup to the body
    pub fn push(&mut self, markup: &str) {
        self.body.push_str(markup);
        self.body.push('\n');
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn styles(&self) -> &[StyleDirective] {
        &self.styles
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serialize as a complete HTML document
    pub fn to_html(&self) -> String {
        let mut head_styles = StyleDirective::new(styles::BASE_CSS).to_html();
        for directive in &self.styles {
            head_styles.push('\n');
            head_styles.push_str(&directive.to_html());
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{head_styles}
</head>
<body>
<div class="app">
<main class="content">
<div class="block-container">
{body}</div>
</main>
</div>
</body>
</html>
"#,
            title = escape_html(&self.title),
            body = self.body,
        )
    }
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Côte d'Ivoire"), "Côte d&#39;Ivoire");
        assert_eq!(escape_html("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
        assert_eq!(escape_html("Brasília"), "Brasília");
    }

    #[test]
    fn test_page_document() {
        let mut page = Page::new("Hosts & Costs");
        page.style(StyleDirective::new(".x { color: red; }"));
        page.push("<p>hello</p>");

        let html = page.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Hosts &amp; Costs</title>"));
        assert!(html.contains(".x { color: red; }"));
        assert!(html.contains("<p>hello</p>"));

        // Page directives come after the base chrome
        let base = html.find("box-sizing").unwrap();
        let extra = html.find(".x { color: red; }").unwrap();
        assert!(base < extra);
    }
}
