//! Turns the network plus one timepoint of activity into drawable primitives.
pub mod arrow;
pub mod connector;
pub mod scene;

pub use arrow::{arrow_size, place_arrow, Arrow, Direction};
pub use connector::{connect, label_box, Connector};
pub use scene::{Primitive, Scene};
