//! The `render` command.
//!
//! Resolves configuration, runs the page bootstrap against the given URL,
//! and writes the assembled HTML document.

use reqwest::Url;
use tracing::info;

use crate::cli::args::RenderArgs;
use crate::config::{PageConfig, loader};
use crate::error::{DocpaneError, FetchError};
use crate::fetch;
use crate::page;
use crate::view::HtmlPage;

/// Resolves the effective configuration: defaults, then the config file,
/// then CLI flag overrides.
fn resolve_config(args: &RenderArgs) -> Result<PageConfig, DocpaneError> {
    let mut config = match &args.config {
        Some(path) => loader::load(path)?,
        None => PageConfig::default(),
    };

    if let Some(timeout) = args.timeout {
        config.timeout = Some(timeout);
    }
    if let Some(fragment) = &args.fragment {
        config.directory_fragment = fragment.clone();
    }

    Ok(config)
}

/// Fetch the page and write the assembled HTML to stdout or `--out`.
///
/// # Errors
///
/// Returns an error for unloadable configuration, an unparseable URL, a
/// transport-level fetch failure, or an unwritable output path.
pub async fn run(args: &RenderArgs) -> Result<(), DocpaneError> {
    let config = resolve_config(args)?;

    let page_url = Url::parse(&args.url)
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", args.url)))?;

    let client = fetch::create_client(config.user_agent.as_deref());
    let mut view = HtmlPage::new();
    page::load(&client, &config, &mut view, &page_url).await?;

    let html = view.to_html();
    match &args.out {
        Some(path) => {
            tokio::fs::write(path, &html).await?;
            info!(path = %path.display(), "wrote page");
        }
        None => print!("{html}"),
    }

    Ok(())
}
