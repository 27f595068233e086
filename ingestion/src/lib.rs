pub mod bipartite;
pub mod csv;
pub mod error;
pub mod payload;
pub mod report;

pub use bipartite::{build_bipartite, BipartiteBuilder};
pub use error::ImportError;
pub use report::{ContentHash, ImportReport};
