//! Container record model and JSON-lines parsing
//!
//! `docker ps --format '{{json .}}'` emits one flat JSON object per
//! container. Each non-empty line parses independently into a
//! `ContainerRecord`; listing order is preserved.

use colored::Color;
use serde::Deserialize;

use super::ParseError;

/// One container as reported by `docker ps`.
///
/// All source fields are the human-readable strings docker already
/// formatted (relative times, sizes, port lists). `display_color` is not
/// part of the source data; the annotator fills it in after the fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerRecord {
    /// Container ID (short form)
    #[serde(rename = "ID")]
    pub id: String,
    /// Container name
    #[serde(rename = "Names")]
    pub names: String,
    /// Image reference
    #[serde(rename = "Image")]
    pub image: String,
    /// Entrypoint/command as reported
    #[serde(rename = "Command")]
    pub command: String,
    /// Relative creation time (e.g., "2 hours ago")
    #[serde(rename = "RunningFor")]
    pub running_for: String,
    /// Human-readable size
    #[serde(rename = "Size")]
    pub size: String,
    /// Human-readable status (e.g., "Up 2 hours")
    #[serde(rename = "Status")]
    pub status: String,
    /// Raw lifecycle state ("running", "exited", or anything else)
    #[serde(rename = "State")]
    pub state: String,
    /// Comma-separated port mappings, possibly empty
    #[serde(rename = "Ports")]
    pub ports: String,
    /// Display color, assigned by position in the listing
    #[serde(skip)]
    pub display_color: Option<Color>,
}

/// Parse a single listing line into a record.
///
/// A missing required field is a parse failure, not a crash: serde's
/// missing-field message is carried through with the line number.
pub fn parse_record(line: &str, line_no: usize) -> Result<ContainerRecord, ParseError> {
    serde_json::from_str(line.trim()).map_err(|source| ParseError {
        line: line_no,
        source,
    })
}

/// Parse the full captured stdout of a listing into ordered records.
///
/// Empty lines are skipped; any other unparseable line aborts the whole
/// parse. No partial results.
pub fn parse_listing(stdout: &str) -> Result<Vec<ContainerRecord>, ParseError> {
    let mut records = Vec::new();

    for (index, line) in stdout.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(line, index + 1)?);
    }

    Ok(records)
}
