//! Terminal styling
//!
//! All styling goes through an injectable `Theme`, so tests can render
//! plain text without stripping escape codes. Container names cycle
//! through a fixed six-color palette in listing order.

use colored::{Color, Colorize};

use crate::docker::record::ContainerRecord;

/// The cyclic palette for container names, in assignment order.
pub const PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
];

/// Styling configuration for rendered output.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    /// Theme with ANSI styling enabled (normal terminal output).
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Theme that renders plain text, for tests and piped output.
    #[must_use]
    pub const fn plain() -> Self {
        Self { colored: false }
    }

    /// Palette color for the record at `index`, cycling modulo the palette.
    #[must_use]
    pub const fn color_for(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }

    /// Style a container name: bold, in its assigned palette color.
    #[must_use]
    pub fn container_name(&self, name: &str, color: Option<Color>) -> String {
        if !self.colored {
            return name.to_string();
        }
        color.map_or_else(
            || name.bold().to_string(),
            |c| name.color(c).bold().to_string(),
        )
    }

    /// Bold text, used for field labels and headers.
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Positive/success styling (green).
    #[must_use]
    pub fn positive(&self, text: &str) -> String {
        if self.colored {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Negative/alert styling (red).
    #[must_use]
    pub fn negative(&self, text: &str) -> String {
        if self.colored {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign each record its display color by position, cycling the palette.
///
/// Record order is untouched; `display_color` is the only field written.
pub fn assign_colors(records: &mut [ContainerRecord]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.display_color = Some(Theme::color_for(index));
    }
}
