//! Unit tests covering the generate command.

use super::helpers::{Workspace, output_text};
use super::*;
use crate::generate::{GenerateArgs, GenerateConfig, run_generate_with};
use courier_data::{GeneratorConfig, read_problem};
use rstest::rstest;

#[rstest]
fn generate_requires_an_output_directory() {
    let err = GenerateConfig::try_from(GenerateArgs::default()).expect_err("missing output dir");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_OUTPUT_DIR);
            assert_eq!(env, ENV_OUTPUT_DIR);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn generate_fills_in_generator_defaults() {
    let config = GenerateConfig::try_from(GenerateArgs {
        output_dir: Some("cases".into()),
        seed: Some(42),
        ..GenerateArgs::default()
    })
    .expect("config builds");
    assert_eq!(config.count, 1);
    assert_eq!(config.generator.seed, 42);
    assert_eq!(config.generator.nodes, GeneratorConfig::default().nodes);
}

#[rstest]
fn generate_writes_and_lists_instances() {
    let workspace = Workspace::new();
    let args = GenerateArgs {
        output_dir: Some(workspace.path("cases")),
        count: Some(2),
        nodes: Some(16),
        seed: Some(3),
    };
    let mut stdout = Vec::new();
    run_generate_with(args, &mut stdout).expect("generate succeeds");

    let expected = [
        workspace.path("cases/input_0.txt"),
        workspace.path("cases/input_1.txt"),
    ];
    let text = output_text(stdout);
    let listed: Vec<_> = text.lines().collect();
    assert_eq!(listed, [expected[0].as_str(), expected[1].as_str()]);
    for path in &expected {
        let problem = read_problem(path).expect("generated file parses");
        assert_eq!(problem.node_count(), 16);
    }
}

#[rstest]
fn generate_rejects_a_file_as_output_directory() {
    let workspace = Workspace::new();
    let file = workspace.write("cases", "occupied");
    let args = GenerateArgs {
        output_dir: Some(file),
        ..GenerateArgs::default()
    };
    match run_generate_with(args, &mut Vec::new()).expect_err("output is a file") {
        CliError::OutputDirectoryNotDirectory { .. } => {}
        other => panic!("expected OutputDirectoryNotDirectory, found {other:?}"),
    }
}
