//! Errors raised while decoding or storing plan documents.

use std::io;

use camino::Utf8PathBuf;
use courier_core::{CommandParseError, PlanError};
use thiserror::Error;

/// Reasons a [`PlanDocument`](super::PlanDocument) cannot become a typed plan.
///
/// Steps are reported 0-based; vehicle keys are echoed exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlanParseError {
    /// A vehicle key was not a positive integer.
    #[error("step {step}: vehicle key {key:?} is not a positive integer")]
    InvalidVehicleKey {
        /// Step holding the key.
        step: usize,
        /// The key as written.
        key: String,
    },
    /// Two keys in one step named the same vehicle.
    #[error("step {step}: vehicle key {key:?} repeats an earlier vehicle")]
    DuplicateVehicle {
        /// Step holding the keys.
        step: usize,
        /// The repeated key as written.
        key: String,
    },
    /// A command string was outside the recognised grammar.
    #[error("step {step}, vehicle {key}: invalid command")]
    InvalidCommand {
        /// Step holding the command.
        step: usize,
        /// Vehicle key as written.
        key: String,
        /// Why the command was rejected.
        #[source]
        source: CommandParseError,
    },
    /// A vehicle id fell outside the problem's fleet.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Errors raised when loading a plan document from disk.
#[derive(Debug, Error)]
pub enum ReadPlanError {
    /// The file could not be opened or read.
    #[error("failed to read plan document {path}")]
    Io {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The file was not a valid plan document.
    #[error("plan document {path} is not valid JSON with a `commands` list")]
    Json {
        /// Path that was decoded.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when writing a plan document to disk.
#[derive(Debug, Error)]
pub enum WritePlanError {
    /// The file could not be created or written.
    #[error("failed to write plan document {path}")]
    Io {
        /// Path that was written.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// Encoding the document failed.
    #[error("failed to encode plan document {path}")]
    Json {
        /// Path that was written.
        path: Utf8PathBuf,
        /// Encoder failure.
        #[source]
        source: serde_json::Error,
    },
}
