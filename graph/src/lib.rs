pub mod error;
pub mod grouping;
pub mod index;
pub mod overlap;
pub mod projection;

pub use error::GraphError;
pub use index::NetworkIndex;
pub use overlap::build_org_overlap_matrix;
pub use projection::{project, project_org_graph, project_people_graph};
