//! Container listing renderer
//!
//! Renders annotated records as either a detailed multi-field view or a
//! slim one-name-per-line view, followed by a totals summary. Output
//! goes to an injected writer; `main` passes a locked stdout handle.

use std::io::{self, Write};

use crate::docker::record::ContainerRecord;

use super::ports::reflow_ports;
use super::state::{is_running, state_label};
use super::theme::Theme;

/// Width of the indented label column in the detail view.
const FIELD_WIDTH: usize = 30;

/// Display flags for a render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include non-running containers
    pub show_all: bool,
    /// One line per container, name only
    pub slim: bool,
}

/// Renders container listings to a writer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Create a renderer with the given theme.
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render the listing and summary for `records`.
    ///
    /// Without `show_all`, only records whose mapped label counts as
    /// running appear. The summary total always reflects the full input;
    /// the running count reflects the records actually iterated.
    pub fn render(
        &self,
        records: &[ContainerRecord],
        opts: RenderOptions,
        out: &mut impl Write,
    ) -> io::Result<()> {
        let mut running = 0_usize;

        writeln!(out)?;
        if !opts.slim {
            let header = if opts.show_all {
                "All docker containers"
            } else {
                "All currently running docker containers"
            };
            writeln!(out, "{}", self.theme.bold(header))?;
        }

        for record in records {
            let label = state_label(&record.state, &self.theme);
            if !opts.show_all && !is_running(&label) {
                continue;
            }
            if is_running(&label) {
                running += 1;
            }

            let name = self
                .theme
                .container_name(&record.names, record.display_color);
            if opts.slim {
                writeln!(out, "{name}")?;
            } else {
                writeln!(out)?;
                writeln!(out, "{name}")?;
                self.field(out, "Container ID", &record.id)?;
                self.field(out, "Image", &record.image)?;
                self.field(out, "Command", &record.command)?;
                self.field(out, "Created", &record.running_for)?;
                self.field(out, "Size", &record.size)?;
                self.field(out, "Status", &record.status)?;
                self.field(out, "State", &label)?;
                self.field(out, "Ports", &reflow_ports(&record.ports))?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Total containers:\t{}", records.len())?;
        writeln!(out, "Total running:\t\t{running}")?;
        writeln!(out)?;

        Ok(())
    }

    /// One labeled detail line, label column padded to a fixed width.
    fn field(&self, out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
        let tag = format!("\t{}", self.theme.bold(&format!("{label}:")));
        writeln!(out, "{tag:<FIELD_WIDTH$} {value}")
    }
}
