use boardmap_core::error::{BoardmapError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("invalid row payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
    #[error("csv line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
    #[error("upload has {actual} rows, limit is {limit}")]
    TooManyRows { actual: usize, limit: usize },
}

impl BoardmapError for ImportError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}
