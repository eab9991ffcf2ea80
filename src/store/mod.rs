//! In-memory model: the pathway network and the activity time series.
pub mod activity;
pub mod network;
pub mod types;

pub use activity::{ActivityTable, Frame, MagnitudeRange};
pub use network::Network;
pub use types::{Edge, Node, NodeId, ShapeKind};
