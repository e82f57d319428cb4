// src/error.rs
//! Error taxonomy for ingestion and graph construction.
//!
//! The core never terminates the process; every failure is surfaced as a
//! `DotRankError` and mapped to an exit code by the binary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotRankError {
    #[error("cannot read input '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input must start with 'digraph <identifier> {{', got: {line}")]
    MalformedHeader { line: String },

    #[error("invalid edge line: {line}")]
    MalformedEdge { line: String },

    #[error("invalid identifier '{ident}': must start with a letter and contain only letters, digits, or underscores")]
    InvalidIdentifier { ident: String },

    #[error("identifier exceeds {max} characters: '{ident}'")]
    IdentifierTooLong { ident: String, max: usize },

    #[error("graph capacity exceeded: at most {limit} nodes allowed")]
    CapacityExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, DotRankError>;
