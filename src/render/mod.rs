//! Markdown renderer.
//!
//! Converts markdown text to HTML with an anchor id on every heading,
//! collecting a table of contents from the top-level headings, and drives a
//! [`View`] with the result. Each render is a full replacement: the TOC is
//! recomputed from scratch and corresponds 1:1, in document order, to the
//! top-level headings present in the rendered output.

pub mod anchors;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use serde::Serialize;
use tracing::debug;

use crate::view::View;
use anchors::AnchorIds;

/// Heading rank collected into the table of contents.
const TOC_LEVEL: HeadingLevel = HeadingLevel::H1;

/// One table-of-contents entry, derived from a top-level heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Generated anchor id of the heading.
    pub id: String,
    /// Text content of the heading.
    pub text: String,
}

/// Converts markdown to HTML and extracts the table of contents.
///
/// Every heading receives a generated anchor id, starting at the top-level
/// rank; the returned entries cover the top-level headings only, in document
/// order.
#[must_use]
pub fn render_html(markdown: &str) -> (String, Vec<TocEntry>) {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, Options::empty()).collect();
    let mut ids = AnchorIds::new();
    let mut toc = Vec::new();

    let mut i = 0;
    while i < events.len() {
        let Event::Start(Tag::Heading { level, .. }) = &events[i] else {
            i += 1;
            continue;
        };
        let level = *level;

        // Gather the heading's text from the events up to its matching end tag.
        let mut text = String::new();
        let mut j = i + 1;
        while j < events.len() {
            match &events[j] {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
            j += 1;
        }

        let id = ids.assign(&text);
        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(id.clone().into());
        }
        if level == TOC_LEVEL {
            toc.push(TocEntry { id, text });
        }
        i = j;
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    (out, toc)
}

/// Renders a fetched markdown document into the view.
///
/// Sets the title to `display_name`, replaces the content with the rendered
/// HTML, and appends one TOC entry per top-level heading.
pub fn render_document(view: &mut dyn View, markdown: &str, display_name: &str) {
    let (html, toc) = render_html(markdown);
    debug!(name = display_name, entries = toc.len(), "rendered document");

    view.set_title(display_name);
    view.set_content(&html);
    for entry in &toc {
        view.append_toc_entry(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_gets_anchor_id() {
        let (html, _) = render_html("# Getting Started\n");
        assert!(html.contains(r#"<h1 id="getting-started">Getting Started</h1>"#));
    }

    #[test]
    fn test_toc_collects_top_level_only() {
        let (_, toc) = render_html("# One\n\n## Nested\n\n# Two\n");
        let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["one", "two"]);
    }

    #[test]
    fn test_nested_headings_still_get_ids() {
        let (html, _) = render_html("# One\n\n## Nested\n");
        assert!(html.contains(r#"<h2 id="nested">Nested</h2>"#));
    }

    #[test]
    fn test_toc_preserves_document_order() {
        let (_, toc) = render_html("# Zebra\n\n# Apple\n\n# Mango\n");
        let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_duplicate_headings_keep_distinct_ids() {
        let (html, toc) = render_html("# Notes\n\n# Notes\n");
        assert_eq!(toc[0].id, "notes");
        assert_eq!(toc[1].id, "notes-1");
        assert!(html.contains(r#"<h1 id="notes">"#));
        assert!(html.contains(r#"<h1 id="notes-1">"#));
    }

    #[test]
    fn test_heading_with_inline_code() {
        let (_, toc) = render_html("# Using `fetch` calls\n");
        assert_eq!(toc[0].id, "using-fetch-calls");
        assert_eq!(toc[0].text, "Using fetch calls");
    }

    #[test]
    fn test_setext_heading_is_top_level() {
        let (_, toc) = render_html("Overview\n========\n");
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "overview");
    }

    #[test]
    fn test_no_headings_no_toc() {
        let (html, toc) = render_html("just a paragraph\n");
        assert!(toc.is_empty());
        assert!(html.contains("<p>just a paragraph</p>"));
    }

    #[test]
    fn test_render_document_drives_view() {
        use crate::view::HtmlPage;

        let mut page = HtmlPage::new();
        render_document(&mut page, "# First\n\ntext\n\n# Second\n", "notes.md");

        assert_eq!(page.title(), "notes.md");
        assert!(page.content().contains(r#"<h1 id="first">First</h1>"#));
        let ids: Vec<&str> = page.toc().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_render_document_replaces_prior_render() {
        use crate::view::HtmlPage;

        let mut page = HtmlPage::new();
        render_document(&mut page, "# Old\n", "old.md");
        render_document(&mut page, "# New\n", "new.md");

        assert_eq!(page.title(), "new.md");
        assert!(!page.content().contains("Old"));
        let ids: Vec<&str> = page.toc().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["new"]);
    }
}
