use boardmap_core::error::{BoardmapError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node not in graph: {0}")]
    UnknownNode(String),
}

impl BoardmapError for GraphError {
    fn error_code(&self) -> ErrorCode {
        match self {
            GraphError::UnknownNode(_) => ErrorCode::NotFound,
        }
    }
}
