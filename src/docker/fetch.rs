//! Blocking container listing
//!
//! Runs the listing command to completion, captures its output, and
//! parses the JSON lines. One blocking call, no timeout: a hung docker
//! hangs the tool too.

use std::process::Command;

use super::cli::build_command;
use super::record::{parse_listing, ContainerRecord};
use super::FetchError;

/// Fetch the container listing from the local docker CLI.
///
/// `all` includes stopped containers. Records come back in docker's
/// output order, most recently created first.
pub fn fetch_containers(all: bool) -> Result<Vec<ContainerRecord>, FetchError> {
    run_listing(build_command(all))
}

/// Run a listing command to completion and parse its stdout.
///
/// Split from `fetch_containers` so tests can substitute any command
/// that emits the same JSON-lines shape.
pub fn run_listing(mut cmd: Command) -> Result<Vec<ContainerRecord>, FetchError> {
    let output = cmd.output().map_err(FetchError::Launch)?;

    if !output.status.success() {
        return Err(FetchError::CommandFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_listing(&stdout)?)
}
