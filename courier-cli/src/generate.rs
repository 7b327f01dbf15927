//! Generate command implementation for the courier CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::NodeId;
use courier_data::{GeneratorConfig, generate_problem_set};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_COUNT, ARG_NODES, ARG_OUTPUT_DIR, ARG_SEED, CliError, ENV_OUTPUT_DIR};

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "generate",
    long_about = "Write connected random problem instances named \
                 input_<n>.txt. Instance n is seeded with the base seed \
                 plus n, so a run is reproducible.",
    about = "Generate random problems"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct GenerateArgs {
    /// Directory receiving the problem files.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// Number of instances to write.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Nodes per instance.
    #[arg(long = ARG_NODES, value_name = "n")]
    #[serde(default)]
    pub(crate) nodes: Option<NodeId>,
    /// Base seed for the random stream.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GenerateConfig {
    pub(crate) output_dir: Utf8PathBuf,
    pub(crate) count: usize,
    pub(crate) generator: GeneratorConfig,
}

impl GenerateConfig {
    pub(crate) fn validate_output(&self) -> Result<(), CliError> {
        require_output_dir(&self.output_dir)
    }
}

fn require_output_dir(path: &Utf8Path) -> Result<(), CliError> {
    match courier_fs::dir_is_dir(path) {
        Ok(false) => Err(CliError::OutputDirectoryNotDirectory {
            path: path.to_path_buf(),
        }),
        // Missing directories are created on write.
        Ok(true) | Err(_) => Ok(()),
    }
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let output_dir = args.output_dir.ok_or(CliError::MissingArgument {
            field: ARG_OUTPUT_DIR,
            env: ENV_OUTPUT_DIR,
        })?;
        let defaults = GeneratorConfig::default();
        let generator = GeneratorConfig {
            nodes: args.nodes.unwrap_or(defaults.nodes),
            seed: args.seed.unwrap_or(defaults.seed),
            ..defaults
        };
        Ok(Self {
            output_dir,
            count: args.count.unwrap_or(1),
            generator,
        })
    }
}

pub(crate) fn run_generate_with(args: GenerateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_output()?;
    let written = generate_problem_set(&config.generator, config.count, &config.output_dir)?;
    for path in written {
        writeln!(writer, "{path}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
