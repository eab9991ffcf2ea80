//! Loaders for the two input files.
pub mod table;
pub mod xgmml;

pub use table::{load_activity_table, read_activity_table, TableOptions};
pub use xgmml::{load_network, parse_network};
