//! Docker CLI integration
//!
//! Builds the `docker ps` invocation, runs it as a blocking subprocess,
//! and parses its JSON-lines output into container records. Any failure
//! here is fatal: there is nothing to render without container data.

pub mod cli;
pub mod fetch;
pub mod record;

use std::io;

use thiserror::Error;

/// A line of `docker ps` output that is not a valid container record.
#[derive(Debug, Error)]
#[error("invalid container record on line {line}: {source}")]
pub struct ParseError {
    /// 1-based line number within the captured stdout
    pub line: usize,
    /// Underlying JSON error
    #[source]
    pub source: serde_json::Error,
}

/// Failure to obtain the container listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The docker binary could not be started
    #[error("failed to launch `docker`: {0}")]
    Launch(#[source] io::Error),
    /// docker ran but exited with a failure status
    #[error("`docker ps` exited with status {}: {stderr}", fmt_exit_code(.code))]
    CommandFailed {
        /// Process exit code (`None` if killed by signal)
        code: Option<i32>,
        /// Captured stderr, trimmed
        stderr: String,
    },
    /// A line of output was not a valid container record
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Format an exit code for display, returning "unknown" if the process was killed by signal.
fn fmt_exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}
