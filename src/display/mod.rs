//! Output formats.
pub mod svg;

pub use svg::render_svg;
