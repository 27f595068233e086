pub mod graph;

pub use graph::{Neighbor, NetworkIndex};
