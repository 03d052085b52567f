//! The `toc` command.
//!
//! Prints the table of contents of a local markdown file, one entry per
//! top-level heading, in document order.

use crate::cli::args::{OutputFormat, TocArgs};
use crate::error::DocpaneError;
use crate::render;

/// Scan a markdown file and print its table of contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read or JSON output fails to
/// serialize.
pub async fn run(args: &TocArgs) -> Result<(), DocpaneError> {
    let markdown = tokio::fs::read_to_string(&args.file).await?;
    let (_, entries) = render::render_html(&markdown);

    match args.format {
        OutputFormat::Human => {
            for entry in &entries {
                println!("{}\t{}", entry.id, entry.text);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
