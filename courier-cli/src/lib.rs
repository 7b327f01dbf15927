//! Command-line interface for scoring and generating courier problems.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod batch;
mod error;
mod evaluate;
mod generate;

pub use error::CliError;

use batch::{BatchArgs, run_batch_with};
use evaluate::{EvaluateArgs, run_evaluate_with};
use generate::{GenerateArgs, run_generate_with};

const ARG_PROBLEM: &str = "problem";
const ARG_PLAN: &str = "plan";
const ARG_MAX_STEPS: &str = "max-steps";
const ARG_INPUTS: &str = "inputs";
const ARG_OUTPUTS: &str = "outputs";
const ARG_OUTPUT_DIR: &str = "output-dir";
const ARG_COUNT: &str = "count";
const ARG_NODES: &str = "nodes";
const ARG_SEED: &str = "seed";
const ENV_PROBLEM: &str = "COURIER_CMDS_EVALUATE_PROBLEM";
const ENV_PLAN: &str = "COURIER_CMDS_EVALUATE_PLAN";
const ENV_INPUTS: &str = "COURIER_CMDS_BATCH_INPUTS";
const ENV_OUTPUTS: &str = "COURIER_CMDS_BATCH_OUTPUTS";
const ENV_OUTPUT_DIR: &str = "COURIER_CMDS_GENERATE_OUTPUT_DIR";

/// Run the courier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs are missing or
/// malformed, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Evaluate(args) => run_evaluate_with(args, writer),
        Command::Batch(args) => run_batch_with(args, writer),
        Command::Generate(args) => run_generate_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Score and generate courier fleet routing problems",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one plan document against one problem file.
    Evaluate(EvaluateArgs),
    /// Score a directory of plan documents against a directory of problems.
    Batch(BatchArgs),
    /// Write random problem instances.
    Generate(GenerateArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match courier_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn require_directory(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match courier_fs::dir_is_dir(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotDirectory {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
