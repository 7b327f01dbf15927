//! Error types raised while evaluating plans from disk.

use std::io;

use camino::Utf8PathBuf;
use courier_data::{PlanParseError, ReadPlanError, ReadProblemError};
use thiserror::Error;

/// Errors that stop a single evaluation or a whole batch.
///
/// Rule violations inside a plan are never errors; they are scored.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The problem file could not be loaded.
    #[error(transparent)]
    ReadProblem(#[from] ReadProblemError),
    /// The plan document could not be loaded.
    #[error(transparent)]
    ReadPlan(#[from] ReadPlanError),
    /// The plan document decoded but does not form a valid plan.
    #[error("malformed plan in {path}")]
    MalformedPlan {
        /// Plan document path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: PlanParseError,
    },
    /// Listing the input directory failed.
    #[error("failed to list problem inputs in {path}")]
    ListInputs {
        /// Directory that was listed.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The input path is not a directory.
    #[error("problem input path {path} is not a directory")]
    InputsNotDirectory {
        /// Offending path.
        path: Utf8PathBuf,
    },
}
