//! Heading anchor id generation.
//!
//! Heading text is free-form; anchors must be stable, URL-safe fragment
//! identifiers. Slugs are derived from the text and disambiguated with a
//! numeric suffix when the same text appears more than once, so every
//! heading in a document gets a distinct id.

use std::collections::HashMap;

/// Fallback slug for headings whose text slugifies to nothing
/// (e.g. punctuation-only headings).
const EMPTY_SLUG: &str = "section";

/// Allocates unique anchor ids for one rendered document.
///
/// State is per-document: a new render starts from a fresh generator, so
/// ids never leak across renders.
#[derive(Debug, Default)]
pub struct AnchorIds {
    seen: HashMap<String, usize>,
}

impl AnchorIds {
    /// Creates a generator with no allocated ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the anchor id for a heading with the given text.
    ///
    /// The first occurrence of a slug is returned as-is; repeats get
    /// `-1`, `-2`, ... suffixes in order of appearance.
    pub fn assign(&mut self, heading_text: &str) -> String {
        let slug = {
            let s = slug::slugify(heading_text);
            if s.is_empty() { EMPTY_SLUG.to_string() } else { s }
        };

        let count = self.seen.entry(slug.clone()).or_insert(0);
        let id = if *count == 0 {
            slug.clone()
        } else {
            format!("{slug}-{count}")
        };
        *count += 1;
        id
    }
}
