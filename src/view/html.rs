//! Standalone HTML page assembly.
//!
//! [`HtmlPage`] accumulates view mutations and serializes them into a
//! complete HTML document. Text channels (title, body text, TOC labels) are
//! escaped; the content and directory channels carry raw HTML by contract.

use std::fmt::Write;

use crate::render::TocEntry;

use super::View;

/// Escapes text for use in HTML element content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for use in a double-quoted HTML attribute value.
fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Accumulated page state, serialized on demand by [`HtmlPage::to_html`].
///
/// Each area maps to one container in the emitted document. A body-text
/// override, once set, wins over all other areas; the independent fetches
/// may land in either order without changing the displayed result.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    title: String,
    content: String,
    directory: String,
    toc: Vec<TocEntry>,
    body_override: Option<String>,
}

impl HtmlPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current content HTML.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current directory container HTML.
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Current table-of-contents entries, in insertion order.
    #[must_use]
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    /// The body-text override, if one was set.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body_override.as_deref()
    }

    /// Serializes the page into a complete HTML document.
    ///
    /// The TOC renders each entry as a link whose target and visible label
    /// are both the anchor id.
    #[must_use]
    pub fn to_html(&self) -> String {
        if let Some(text) = &self.body_override {
            return format!(
                "<!DOCTYPE html>\n<html>\n<body>{}</body>\n</html>\n",
                escape_text(text)
            );
        }

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_text(&self.title));
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(
            out,
            "<h1 id=\"doc-title\">{}</h1>",
            escape_text(&self.title)
        );

        out.push_str("<nav id=\"toc\">\n<ul>\n");
        for entry in &self.toc {
            let _ = writeln!(
                out,
                "<li><a href=\"#{}\">{}</a></li>",
                escape_attr(&entry.id),
                escape_text(&entry.id)
            );
        }
        out.push_str("</ul>\n</nav>\n");

        let _ = writeln!(out, "<main id=\"content\">\n{}</main>", self.content);
        let _ = writeln!(out, "<aside id=\"directory\">\n{}\n</aside>", self.directory);
        out.push_str("</body>\n</html>\n");
        out
    }
}

impl View for HtmlPage {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
        // Entries from a previous render describe content that no longer exists.
        self.toc.clear();
    }

    fn set_directory(&mut self, html: &str) {
        self.directory = html.to_string();
    }

    fn append_toc_entry(&mut self, entry: &TocEntry) {
        self.toc.push(entry.clone());
    }

    fn set_body_text(&mut self, text: &str) {
        self.body_override = Some(text.to_string());
    }
}
