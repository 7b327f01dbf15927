//! Errors raised while reading or writing problem text files.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Reasons a problem text fails to parse.
///
/// Line numbers are 1-based, matching what an editor shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProblemParseError {
    /// The input was empty.
    #[error("problem text is empty; expected a header line")]
    MissingHeader,
    /// A line the header promised is absent.
    #[error("line {line}: missing {what}")]
    MissingLine {
        /// Line that should have existed.
        line: usize,
        /// What the line should have described.
        what: &'static str,
    },
    /// A token was not a non-negative integer.
    #[error("line {line}: {token:?} is not a non-negative integer")]
    InvalidInteger {
        /// Line holding the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A line held the wrong number of fields.
    #[error("line {line}: expected {expected} fields for {what}, found {found}")]
    FieldCount {
        /// Line holding the fields.
        line: usize,
        /// What the line describes.
        what: &'static str,
        /// Fields required.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// An edge declared a zero weight.
    #[error("line {line}: edge {from}-{to} has zero weight")]
    ZeroWeight {
        /// Line holding the edge.
        line: usize,
        /// First endpoint.
        from: u32,
        /// Second endpoint.
        to: u32,
    },
    /// An edge joined a node to itself.
    #[error("line {line}: edge {node}-{node} loops back to its own node")]
    SelfLoop {
        /// Line holding the edge.
        line: usize,
        /// Node at both ends.
        node: u32,
    },
}

/// Errors raised when loading a problem file from disk.
#[derive(Debug, Error)]
pub enum ReadProblemError {
    /// The file could not be opened or read.
    #[error("failed to read problem file {path}")]
    Io {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The file contents were malformed.
    #[error("malformed problem file {path}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: ProblemParseError,
    },
}

/// Errors raised when writing a problem file to disk.
#[derive(Debug, Error)]
#[error("failed to write problem file {path}")]
pub struct WriteProblemError {
    /// Path that was written.
    pub path: Utf8PathBuf,
    /// Underlying IO failure.
    #[source]
    pub source: io::Error,
}
