// Library root: pathway diagrams overlaid with per-timepoint activity arrows.
// Inputs are an activity table (CSV) and an XGMML graph export; output is one
// SVG per timepoint.

pub mod analysis;
pub mod compose;
pub mod display;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod logging;
pub mod pipeline;
pub mod store;
pub mod style;

pub use error::{PathwayError, Result};
pub use pipeline::{render_series, OutputOptions, Pipeline, RunConfig};
pub use style::RenderStyle;

/// Crate version, as reported by the CLI.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
