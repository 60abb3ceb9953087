use thiserror::Error;

/// Reasons a stream message cannot be turned into a [`Snapshot`](crate::snapshot::Snapshot).
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field has {actual} rows but {declared} were declared")]
    FieldRows { declared: usize, actual: usize },
    #[error("field row {row} has {actual} cells but {declared} columns were declared")]
    FieldColumns { row: usize, declared: usize, actual: usize },
}
