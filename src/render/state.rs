//! Lifecycle state display mapping

use super::theme::Theme;

/// Map a raw container state to its display label.
///
/// `running` and `exited` get compact styled badges; every other state
/// (paused, restarting, dead, ...) renders as the literal `Unknown`.
#[must_use]
pub fn state_label(state: &str, theme: &Theme) -> String {
    match state {
        "running" => theme.positive("[ON]"),
        "exited" => theme.negative("[OFF]"),
        _ => "Unknown".to_string(),
    }
}

/// Whether a rendered state label counts as a running container.
///
/// Keys off the label text, not the raw state: filtering and summary
/// counting both go through this predicate.
#[must_use]
pub fn is_running(label: &str) -> bool {
    label.to_lowercase().contains("on")
}
