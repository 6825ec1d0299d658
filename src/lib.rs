//! docker-pretty-ps - a colorful, human-friendly front end for `docker ps`
//!
//! Shells out to the Docker CLI for a JSON-lines container listing, then
//! renders it as color-coded terminal output with a totals summary.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod docker;
pub mod render;

// Re-export commonly used types
pub use docker::fetch::{fetch_containers, run_listing};
pub use docker::record::{parse_listing, ContainerRecord};
pub use docker::{FetchError, ParseError};
pub use render::ports::reflow_ports;
pub use render::state::{is_running, state_label};
pub use render::theme::{assign_colors, Theme, PALETTE};
pub use render::view::{RenderOptions, Renderer};
