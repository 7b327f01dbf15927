//! Batch command implementation for the courier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_evaluator::{BatchOptions, BatchReport, evaluate_batch};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_INPUTS, ARG_MAX_STEPS, ARG_OUTPUTS, CliError, ENV_INPUTS, ENV_OUTPUTS, require_directory,
};

/// CLI arguments for the `batch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "batch",
    long_about = "Score every input_<n>.txt problem in a directory against \
                 the matching output_<n>.json plan document. Cases that \
                 cannot be evaluated are reported and left out of the total.",
    about = "Score a directory of plans"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct BatchArgs {
    /// Directory holding problem text files.
    #[arg(long = ARG_INPUTS, value_name = "dir")]
    #[serde(default)]
    pub(crate) inputs: Option<Utf8PathBuf>,
    /// Directory holding plan documents.
    #[arg(long = ARG_OUTPUTS, value_name = "dir")]
    #[serde(default)]
    pub(crate) outputs: Option<Utf8PathBuf>,
    /// Replay at most this many steps per plan.
    #[arg(long = ARG_MAX_STEPS, value_name = "steps")]
    #[serde(default)]
    pub(crate) max_steps: Option<usize>,
}

impl BatchArgs {
    pub(crate) fn into_config(self) -> Result<BatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BatchConfig::try_from(merged)
    }
}

/// Resolved `batch` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchConfig {
    pub(crate) inputs: Utf8PathBuf,
    pub(crate) outputs: Utf8PathBuf,
    pub(crate) max_steps: Option<usize>,
}

impl TryFrom<BatchArgs> for BatchConfig {
    type Error = CliError;

    fn try_from(args: BatchArgs) -> Result<Self, Self::Error> {
        let inputs = args.inputs.ok_or(CliError::MissingArgument {
            field: ARG_INPUTS,
            env: ENV_INPUTS,
        })?;
        let outputs = args.outputs.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUTS,
            env: ENV_OUTPUTS,
        })?;
        Ok(Self {
            inputs,
            outputs,
            max_steps: args.max_steps,
        })
    }
}

pub(crate) fn run_batch_with(args: BatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_directory(&config.inputs, ARG_INPUTS)?;
    let options = BatchOptions {
        max_steps: config.max_steps,
        ..BatchOptions::default()
    };
    let report = evaluate_batch(&config.inputs, &config.outputs, options)?;
    write_report(writer, &report).map_err(CliError::WriteOutput)
}

fn write_report(writer: &mut dyn Write, report: &BatchReport) -> std::io::Result<()> {
    for case in &report.cases {
        match &case.outcome {
            Ok(evaluation) => writeln!(writer, "{}: {}", case.case.name(), evaluation.score)?,
            Err(err) => writeln!(writer, "{}: skipped ({err})", case.case.name())?,
        }
    }
    writeln!(writer, "total: {}", report.total())
}
