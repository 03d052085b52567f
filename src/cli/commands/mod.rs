//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod render;
pub mod toc;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::DocpaneError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), DocpaneError> {
    match cli.command {
        Commands::Render(args) => render::run(&args).await,
        Commands::Toc(args) => toc::run(&args).await,
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
