use crate::config::ConnectionSpec;
use thiserror::Error;

/// Exit status for a database that cannot be opened or closed.
pub const EXIT_CONNECTION_FAILURE: i32 = 1;
/// Exit status for a query that fails or yields no usable value.
pub const EXIT_QUERY_FAILURE: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConnectionFailure,
    QueryFailure,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to open sqlite database `{spec}`: {source}")]
    Open {
        spec: ConnectionSpec,
        source: rusqlite::Error,
    },

    #[error("failed to close sqlite database `{spec}`: {source}")]
    Close {
        spec: ConnectionSpec,
        source: rusqlite::Error,
    },

    #[error("failed to query `{sql}`: {source}")]
    Query { sql: String, source: rusqlite::Error },

    #[error("failed to query `{sql}`: statement is not read-only")]
    NotReadOnly { sql: String },

    #[error("failed to query `{sql}`: expected 1 column, got {columns}")]
    ColumnCount { sql: String, columns: usize },

    #[error("failed to query `{sql}`: empty value")]
    EmptyValue { sql: String },
}

impl ProbeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProbeError::Open { .. } | ProbeError::Close { .. } => ErrorKind::ConnectionFailure,
            ProbeError::Query { .. }
            | ProbeError::NotReadOnly { .. }
            | ProbeError::ColumnCount { .. }
            | ProbeError::EmptyValue { .. } => ErrorKind::QueryFailure,
        }
    }

    /// Process exit status for this error. Query failures use a distinct
    /// status from connection failures.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::ConnectionFailure => EXIT_CONNECTION_FAILURE,
            ErrorKind::QueryFailure => EXIT_QUERY_FAILURE,
        }
    }
}
