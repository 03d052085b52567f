//! Renderer properties: TOC correspondence with top-level headings, anchor
//! ids, and the assembled HTML page.

use docpane::render::{render_document, render_html};
use docpane::view::HtmlPage;
use proptest::prelude::*;

#[test]
fn toc_entries_match_top_level_headings_in_order() {
    let markdown = "# Alpha\n\ntext\n\n## Nested\n\n# Beta\n\n# Gamma\n";
    let (html, toc) = render_html(markdown);

    let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "beta", "gamma"]);

    for entry in &toc {
        assert!(
            html.contains(&format!(r#"<h1 id="{}">"#, entry.id)),
            "anchor {} missing from rendered HTML",
            entry.id
        );
    }
}

#[test]
fn rendered_page_links_toc_to_headings() {
    let mut page = HtmlPage::new();
    render_document(&mut page, "# First Section\n\nbody\n", "notes.md");

    let html = page.to_html();
    assert!(html.contains(r#"<h1 id="first-section">First Section</h1>"#));
    // Link target and visible label are both the anchor id.
    assert!(html.contains(r##"<a href="#first-section">first-section</a>"##));
}

#[test]
fn repeated_headings_stay_one_to_one() {
    let (html, toc) = render_html("# Setup\n\n# Setup\n\n# Setup\n");

    assert_eq!(toc.len(), 3);
    let ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["setup", "setup-1", "setup-2"]);
    for id in ids {
        assert!(html.contains(&format!(r#"<h1 id="{id}">"#)));
    }
}

#[test]
fn deep_heading_ranks_are_excluded_from_toc() {
    let markdown = "## Two\n\n### Three\n\n#### Four\n";
    let (_, toc) = render_html(markdown);
    assert!(toc.is_empty());
}

proptest! {
    /// A document with exactly N top-level headings yields exactly N TOC
    /// entries, whatever the heading text.
    #[test]
    fn toc_count_matches_heading_count(
        titles in prop::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,2}", 0..8)
    ) {
        let markdown: String = titles
            .iter()
            .map(|t| format!("# {t}\n\nparagraph\n\n"))
            .collect();

        let (_, toc) = render_html(&markdown);
        prop_assert_eq!(toc.len(), titles.len());
    }

    /// Generated ids are unique even for colliding heading text.
    #[test]
    fn toc_ids_are_unique(
        title in "[a-z]{1,10}",
        repeats in 1usize..6
    ) {
        let markdown: String = std::iter::repeat_n(format!("# {title}\n\n"), repeats).collect();
        let (_, toc) = render_html(&markdown);

        let mut ids: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), repeats);
    }
}
