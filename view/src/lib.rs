pub mod filters;
pub mod store;

pub use filters::{FilterPatch, Filters};
pub use store::{Action, Freshness, Recompute, ViewStore};
