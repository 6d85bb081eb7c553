// src/error.rs

//! Error types shared across the catalog
//!
//! Expected lookup misses are not errors: read operations return empty
//! collections and ingredient deletion reports its outcome as a value.
//! Only storage failures and caller contract violations end up here.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// SQLite failure inside the in-memory storage
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unreadable or malformed configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Fixture or command-line value could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Storage could not be brought up
    #[error("Initialization error: {0}")]
    InitError(String),

    /// Caller supplied no usable key, or a key that resolves to nothing
    /// where a target is mandatory
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation would violate a uniqueness rule
    #[error("Conflict: {0}")]
    ConflictError(String),

    #[error("Not found: {0}")]
    NotFoundError(String),
}

impl Error {
    /// Short machine-readable kind, used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DatabaseError(_) => "database",
            Error::IoError(_) => "io",
            Error::ConfigError(_) => "config",
            Error::ParseError(_) => "parse",
            Error::InitError(_) => "init",
            Error::InvalidArgument(_) => "invalid_argument",
            Error::ConflictError(_) => "conflict",
            Error::NotFoundError(_) => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Error::InvalidArgument("x".into()).kind(), "invalid_argument");
        assert_eq!(Error::ConflictError("x".into()).kind(), "conflict");
        assert_eq!(Error::NotFoundError("x".into()).kind(), "not_found");
    }

    #[test]
    fn test_rusqlite_error_converts() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::DatabaseError(_)));
        assert!(err.to_string().starts_with("Database error"));
    }
}
