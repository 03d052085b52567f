//! Observability module.
//!
//! Structured logging for `docpane` runs. Log output goes to stderr so the
//! assembled HTML on stdout stays clean.

pub mod logging;

pub use logging::{LogFormat, init_logging};
