//! Error types for qfrag

use thiserror::Error;

/// Result type alias for query building
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a builder or rendering a query
#[derive(Debug, Error)]
pub enum Error {
    /// The query has no FROM table
    #[error("the FROM table is mandatory for every query")]
    MissingTable,

    /// The dialect name is not recognized
    #[error("unsupported dialect: {0:?}")]
    UnsupportedDialect(String),

    /// The output writer failed
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl Error {
    /// Check if this is a missing table error
    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable)
    }

    /// Check if this is an unsupported dialect error
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, Self::UnsupportedDialect(_))
    }
}
