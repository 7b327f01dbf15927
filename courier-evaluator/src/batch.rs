//! Directory-level evaluation.
//!
//! Inputs are paired with plan documents by file name: `input_3.txt` in the
//! input directory is scored against `output_3.json` in the output
//! directory. A case that cannot be evaluated is logged and left out of the
//! total; it never stops the rest of the batch.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::Score;
use courier_fs::{dir_is_dir, read_dir_file_names};
use log::{info, warn};
use rayon::prelude::*;

use crate::error::EvaluationError;
use crate::evaluate::{Evaluation, evaluate_files_with_budget};

const INPUT_EXTENSION: &str = ".txt";
const OUTPUT_EXTENSION: &str = ".json";

/// One problem file and the plan document expected to solve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePaths {
    /// Problem text file.
    pub input: Utf8PathBuf,
    /// Plan document, which may not exist.
    pub output: Utf8PathBuf,
}

impl CasePaths {
    /// File name of the problem input.
    #[must_use]
    pub fn name(&self) -> &str {
        self.input.file_name().unwrap_or_else(|| self.input.as_str())
    }
}

/// Knobs for [`evaluate_batch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Replay at most this many steps per plan.
    pub max_steps: Option<usize>,
    /// Evaluate cases on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_steps: None,
            parallel: true,
        }
    }
}

/// Evaluation result for one case.
#[derive(Debug)]
pub struct CaseReport {
    /// Files involved.
    pub case: CasePaths,
    /// Score, or why the case was skipped.
    pub outcome: Result<Evaluation, EvaluationError>,
}

/// Results of a batch run, in input file order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Every case that was attempted.
    pub cases: Vec<CaseReport>,
}

impl BatchReport {
    /// Cases that produced a score.
    pub fn scored(&self) -> impl Iterator<Item = (&CasePaths, &Evaluation)> + '_ {
        self.cases
            .iter()
            .filter_map(|report| report.outcome.as_ref().ok().map(|eval| (&report.case, eval)))
    }

    /// Cases that were skipped, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&CasePaths, &EvaluationError)> + '_ {
        self.cases
            .iter()
            .filter_map(|report| report.outcome.as_ref().err().map(|err| (&report.case, err)))
    }

    /// Sum of the scored cases. Any infinite score makes the total infinite.
    #[must_use]
    pub fn total(&self) -> Score {
        self.scored().map(|(_, evaluation)| evaluation.score).sum()
    }
}

/// Pair every `*.txt` file in `input_dir` with its plan document path.
///
/// Output names replace `input` with `output` in the input file name and
/// swap its trailing `.txt` for `.json`. Cases are sorted by input file name.
///
/// # Errors
/// Returns [`EvaluationError::InputsNotDirectory`] when `input_dir` is not a
/// directory and [`EvaluationError::ListInputs`] when it cannot be listed.
pub fn pair_inputs(
    input_dir: &Utf8Path,
    output_dir: &Utf8Path,
) -> Result<Vec<CasePaths>, EvaluationError> {
    let list_error = |source: std::io::Error| EvaluationError::ListInputs {
        path: input_dir.to_path_buf(),
        source,
    };
    if !dir_is_dir(input_dir).map_err(list_error)? {
        return Err(EvaluationError::InputsNotDirectory {
            path: input_dir.to_path_buf(),
        });
    }
    let names = read_dir_file_names(input_dir).map_err(list_error)?;
    Ok(names
        .into_iter()
        .filter(|name| !name.starts_with('.') && name.ends_with(INPUT_EXTENSION))
        .map(|name| CasePaths {
            output: output_dir.join(output_name(&name)),
            input: input_dir.join(name),
        })
        .collect())
}

fn output_name(input_name: &str) -> String {
    let stem = input_name
        .strip_suffix(INPUT_EXTENSION)
        .unwrap_or(input_name);
    format!("{}{OUTPUT_EXTENSION}", stem.replace("input", "output"))
}

/// Evaluate every case in `input_dir` against the plans in `output_dir`.
///
/// # Errors
/// Only listing the inputs can fail the batch; per-case failures are
/// reported in the [`BatchReport`].
pub fn evaluate_batch(
    input_dir: &Utf8Path,
    output_dir: &Utf8Path,
    options: BatchOptions,
) -> Result<BatchReport, EvaluationError> {
    let cases = pair_inputs(input_dir, output_dir)?;
    let run = |case: CasePaths| {
        let outcome = evaluate_files_with_budget(&case.input, &case.output, options.max_steps);
        if let Err(err) = &outcome {
            warn!("skipping {}: {err}", case.output);
        }
        CaseReport { case, outcome }
    };
    let reports: Vec<CaseReport> = if options.parallel {
        cases.into_par_iter().map(run).collect()
    } else {
        cases.into_iter().map(run).collect()
    };

    let report = BatchReport { cases: reports };
    info!(
        "evaluated {} cases, skipped {}, total score {}",
        report.scored().count(),
        report.skipped().count(),
        report.total()
    );
    Ok(report)
}
