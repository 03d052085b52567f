//! Shared test fixtures: an in-process HTTP server with canned page assets.

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::get;

/// Directory fragment served at the default fragment path.
pub const DIRECTORY_FRAGMENT_HTML: &str =
    r#"<ul><li><a href="?file=notes.md">notes.md</a></li></ul>"#;

/// Markdown document with two top-level headings and one nested heading.
pub const NOTES_MD: &str = "# First Section\n\nsome text\n\n# Second Section\n\n## Detail\n\nmore text\n";

/// A fixture HTTP server bound to an ephemeral localhost port.
pub struct FixtureServer {
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl FixtureServer {
    /// Starts a server with the default routes.
    pub async fn start() -> Self {
        Self::with_router(default_router()).await
    }

    /// Starts a server with a caller-supplied router.
    pub async fn with_router(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fixture listener");
        let addr = listener.local_addr().expect("fixture local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Absolute URL for a path-and-query under this server.
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Routes serving the canned page assets:
/// - `/directory.html.frag` - the directory fragment
/// - `/notes.md` - the markdown document
/// - `/redirect.md` - temporary redirect to `/notes.md`
/// - `/status/{code}` - responds with the given status code and no body
/// - `/slow.md` - sleeps far longer than any test timeout
pub fn default_router() -> Router {
    Router::new()
        .route(
            "/directory.html.frag",
            get(|| async { Html(DIRECTORY_FRAGMENT_HTML) }),
        )
        .route("/notes.md", get(|| async { NOTES_MD }))
        .route(
            "/redirect.md",
            get(|| async { Redirect::temporary("/notes.md") }),
        )
        .route("/status/{code}", get(status_echo))
        .route(
            "/slow.md",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                "late"
            }),
        )
}

async fn status_echo(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
