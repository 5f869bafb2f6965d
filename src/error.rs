use thiserror::Error;

use crate::core::{ChartKind, Orientation};

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("no renderer registered for chart kind `{kind}`")]
    UnsupportedKind { kind: ChartKind },

    #[error("{orientation} container must have at least one child")]
    EmptyContainer { orientation: Orientation },

    #[error("page layout expects {expected} columns, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("a dashboard is already being served by this process")]
    AlreadyServing,

    #[error("markup formatting failed")]
    Format(#[from] std::fmt::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
