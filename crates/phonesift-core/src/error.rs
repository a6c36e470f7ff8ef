use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid input format: {0}")]
    InvalidInputFormat(String),
    #[error("invalid export format: {0}")]
    InvalidExportFormat(String),
}
