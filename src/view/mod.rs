//! View interface.
//!
//! The renderer and page bootstrap mutate the page only through this trait,
//! keeping them independent of any particular rendering target. The default
//! target is [`HtmlPage`], which assembles a standalone HTML document.

mod html;

pub use html::HtmlPage;

use crate::render::TocEntry;

/// Mutation surface of a displayed page.
///
/// All operations are infallible, side-effect-only mutations. The title,
/// content, directory, and TOC areas are disjoint; `set_body_text` replaces
/// the entire page body and takes precedence over every other area at
/// display time, regardless of mutation order.
pub trait View {
    /// Displays a document name in the title element.
    fn set_title(&mut self, title: &str);

    /// Replaces the content container with rendered HTML.
    ///
    /// Also discards any TOC entries, since they described the previous
    /// content.
    fn set_content(&mut self, html: &str);

    /// Injects raw text/HTML into the directory container.
    fn set_directory(&mut self, html: &str);

    /// Appends one entry to the table-of-contents list.
    fn append_toc_entry(&mut self, entry: &TocEntry);

    /// Replaces the entire page body with the given text.
    fn set_body_text(&mut self, text: &str);
}
