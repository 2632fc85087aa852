use thiserror::Error;

use crate::column::ColumnType;
use crate::ids::{ColumnId, ProjectId};

#[derive(Debug, Error)]
pub enum TidyError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),
    #[error("invalid identifier: {0:?}")]
    InvalidId(String),
    #[error("merging requires at least 2 distinct terms, got {distinct}")]
    InvalidMergeRequest { distinct: usize },
    #[error("column `{name}` is {actual}, operation requires a {expected} column")]
    ColumnTypeMismatch {
        name: String,
        expected: ColumnType,
        actual: ColumnType,
    },
}

pub type Result<T> = std::result::Result<T, TidyError>;
