//! Evaluate command implementation for the courier CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use courier_evaluator::{Evaluation, evaluate_files_with_budget};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_MAX_STEPS, ARG_PLAN, ARG_PROBLEM, CliError, ENV_PLAN, ENV_PROBLEM, require_existing,
};

/// CLI arguments for the `evaluate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "evaluate",
    long_about = "Replay a plan document against a problem file and print \
                 its score. The score is the step at which the last task \
                 was delivered, or inf when any command broke the rules or \
                 the plan ended before every task was delivered.",
    about = "Score one plan against one problem"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct EvaluateArgs {
    /// Path to the problem text file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) problem: Option<Utf8PathBuf>,
    /// Path to the JSON plan document.
    #[arg(long = ARG_PLAN, value_name = "path")]
    #[serde(default)]
    pub(crate) plan: Option<Utf8PathBuf>,
    /// Replay at most this many steps.
    #[arg(long = ARG_MAX_STEPS, value_name = "steps")]
    #[serde(default)]
    pub(crate) max_steps: Option<usize>,
}

impl EvaluateArgs {
    pub(crate) fn into_config(self) -> Result<EvaluateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EvaluateConfig::try_from(merged)
    }
}

/// Resolved `evaluate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EvaluateConfig {
    pub(crate) problem: Utf8PathBuf,
    pub(crate) plan: Utf8PathBuf,
    pub(crate) max_steps: Option<usize>,
}

impl EvaluateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.problem, ARG_PROBLEM)?;
        require_existing(&self.plan, ARG_PLAN)?;
        Ok(())
    }
}

impl TryFrom<EvaluateArgs> for EvaluateConfig {
    type Error = CliError;

    fn try_from(args: EvaluateArgs) -> Result<Self, Self::Error> {
        let problem = args.problem.ok_or(CliError::MissingArgument {
            field: ARG_PROBLEM,
            env: ENV_PROBLEM,
        })?;
        let plan = args.plan.ok_or(CliError::MissingArgument {
            field: ARG_PLAN,
            env: ENV_PLAN,
        })?;
        Ok(Self {
            problem,
            plan,
            max_steps: args.max_steps,
        })
    }
}

pub(crate) fn run_evaluate_with(args: EvaluateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let evaluation = evaluate_files_with_budget(&config.problem, &config.plan, config.max_steps)?;
    write_evaluation(writer, &evaluation).map_err(CliError::WriteOutput)
}

fn write_evaluation(writer: &mut dyn Write, evaluation: &Evaluation) -> std::io::Result<()> {
    writeln!(writer, "score: {}", evaluation.score)?;
    if let Some(rejected) = &evaluation.first_error {
        writeln!(writer, "first rejected step {}: {}", rejected.step, rejected.error)?;
    }
    Ok(())
}
