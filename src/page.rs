//! Page bootstrap.
//!
//! Drives one page load: always fetch the directory fragment, and fetch the
//! markdown document named by the `file` query parameter when one is present
//! and valid. The two fetches are independent futures writing to disjoint
//! parts of the view; they may complete in either order.
//!
//! Failures here are page content, not process errors: a non-200 status or a
//! bad `file` parameter replaces part of the page with a plain text message,
//! exactly as a reader of the page would see it.

use reqwest::Url;
use tracing::{debug, info};

use crate::config::PageConfig;
use crate::error::FetchError;
use crate::fetch::{self, FetchOutcome};
use crate::render;
use crate::view::View;

/// Query parameter naming the markdown document to load.
const FILE_PARAM: &str = "file";

/// Required suffix for the `file` parameter value.
const MARKDOWN_SUFFIX: &str = ".md";

/// Body text shown when the `file` parameter does not name a markdown file.
pub const INVALID_FILE_PARAM: &str = "Invalid param for file";

// ============================================================================
// Document Fetch Planning
// ============================================================================

/// What the `file` query parameter asks for, decided before any fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DocPlan {
    /// No `file` parameter: leave the body untouched.
    Absent,
    /// A `file` parameter that does not end in `.md`.
    Invalid,
    /// A markdown document to fetch, with its display name.
    Fetch(Url, String),
}

/// Outcome of the (possibly skipped) document fetch.
enum DocResult {
    Absent,
    Invalid,
    Fetched(String, FetchOutcome),
}

/// Reads the `file` query parameter from the page URL.
fn file_param(page_url: &Url) -> Option<String> {
    page_url
        .query_pairs()
        .find(|(key, _)| key == FILE_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Decides whether and what to fetch for the document area.
fn plan_document(page_url: &Url) -> Result<DocPlan, FetchError> {
    match file_param(page_url) {
        None => Ok(DocPlan::Absent),
        Some(name) if !name.ends_with(MARKDOWN_SUFFIX) => Ok(DocPlan::Invalid),
        Some(name) => {
            let url = page_url
                .join(&name)
                .map_err(|e| FetchError::InvalidUrl(format!("{name}: {e}")))?;
            Ok(DocPlan::Fetch(url, name))
        }
    }
}

// ============================================================================
// Page Load
// ============================================================================

/// Loads one page into the view.
///
/// The directory fragment is always fetched; its raw body lands in the
/// directory container, or the container text becomes
/// `Failed to get <fragment>` on any failure, HTTP or transport. The
/// markdown document is fetched only for a present, valid `file` parameter;
/// a non-200 status replaces the page body with the status line.
///
/// # Errors
///
/// Returns [`FetchError`] if a URL cannot be resolved or if the markdown
/// fetch fails at the transport level before reaching a terminal status.
/// The directory area is populated before such an error is returned.
pub async fn load(
    client: &reqwest::Client,
    config: &PageConfig,
    view: &mut dyn View,
    page_url: &Url,
) -> Result<(), FetchError> {
    info!(url = %page_url, "loading page");

    let fragment_url = page_url
        .join(&config.directory_fragment)
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.directory_fragment)))?;
    let plan = plan_document(page_url)?;

    let directory = fetch::fetch(client, fragment_url, config.timeout);
    let document = async {
        match plan {
            DocPlan::Absent => Ok(DocResult::Absent),
            DocPlan::Invalid => Ok(DocResult::Invalid),
            DocPlan::Fetch(url, name) => fetch::fetch(client, url, config.timeout)
                .await
                .map(|outcome| DocResult::Fetched(name, outcome)),
        }
    };
    let (directory_outcome, document_result) = tokio::join!(directory, document);

    match directory_outcome {
        Ok(FetchOutcome::Success(resp)) => view.set_directory(&resp.body),
        Ok(FetchOutcome::Failure(_)) | Err(_) => {
            debug!(fragment = config.directory_fragment, "directory fetch failed");
            view.set_directory(&format!("Failed to get {}", config.directory_fragment));
        }
    }

    match document_result? {
        DocResult::Absent => {}
        DocResult::Invalid => view.set_body_text(INVALID_FILE_PARAM),
        DocResult::Fetched(name, FetchOutcome::Success(resp)) => {
            render::render_document(view, &resp.body, &name);
        }
        DocResult::Fetched(_, FetchOutcome::Failure(resp)) => {
            view.set_body_text(&resp.status_line());
        }
    }

    Ok(())
}
