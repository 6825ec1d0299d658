//! Terminal rendering
//!
//! Theme-driven formatting of container records: state badges, port
//! reflow, detail and slim views, summary totals.

pub mod ports;
pub mod state;
pub mod theme;
pub mod view;

pub use theme::Theme;
pub use view::RenderOptions;
pub use view::Renderer;
