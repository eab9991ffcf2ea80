//! Diagnostics over the loaded inputs.
pub mod coverage;

pub use coverage::{format_report, Coverage, TimepointCoverage};
