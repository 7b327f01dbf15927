//! Unit tests for single and batch evaluation.

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::test_support::{single_edge_problem, solo_plan};
use courier_core::{Command, InvalidCommandKind, Score};
use courier_data::PlanParseError;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;

const PROBLEM: &str = "2 1 1 1\n0\n0 1 3\n0 0 1\n";
const DELIVERY: &str = r#"{"commands": [{"1": "PICK UP"}, {"1": "GO 0 1"}, {"1": "FORWARD"}, {"1": "FORWARD"}, {"1": "DROP"}]}"#;

struct Workspace {
    _tmp: TempDir,
    inputs: Utf8PathBuf,
    outputs: Utf8PathBuf,
}

impl Workspace {
    fn write(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 temp dir");
    let inputs = root.join("inputs");
    let outputs = root.join("outputs");
    std::fs::create_dir_all(&inputs).expect("create inputs");
    std::fs::create_dir_all(&outputs).expect("create outputs");
    Workspace {
        _tmp: tmp,
        inputs,
        outputs,
    }
}

fn delivery_plan() -> Vec<Command> {
    vec![
        Command::PickUp,
        Command::Go { from: 0, to: 1 },
        Command::Forward,
        Command::Forward,
        Command::Drop,
    ]
}

#[rstest]
fn valid_plan_scores_its_completion_time() {
    let evaluation = evaluate(&single_edge_problem(3), &solo_plan(&delivery_plan(), 1));
    assert_eq!(evaluation.score, Score::completed(5));
    assert_eq!(evaluation.completion_time, Some(5));
    assert_eq!(evaluation.steps_seen, 5);
    assert!(evaluation.is_valid());
}

#[rstest]
fn rejected_plan_reports_the_first_error() {
    let mut commands = delivery_plan();
    commands.insert(0, Command::Forward);
    let evaluation = evaluate(&single_edge_problem(3), &solo_plan(&commands, 1));
    assert_eq!(evaluation.score, Score::INFINITE);
    let first = evaluation.first_error.expect("rejection recorded");
    assert_eq!(first.step, 0);
    assert_eq!(first.error.kind, InvalidCommandKind::NotInTransit);
    assert_eq!(evaluation.steps_seen, 6);
}

#[rstest]
#[case(Some(4), Score::INFINITE, 4)]
#[case(Some(5), Score::completed(5), 5)]
#[case(Some(50), Score::completed(5), 5)]
fn budget_truncates_the_plan(
    #[case] budget: Option<usize>,
    #[case] expected: Score,
    #[case] steps: usize,
) {
    let evaluation = evaluate_with_budget(
        &single_edge_problem(3),
        &solo_plan(&delivery_plan(), 1),
        budget,
    );
    assert_eq!(evaluation.score, expected);
    assert_eq!(evaluation.steps_seen, steps);
}

#[rstest]
fn files_are_loaded_and_scored(workspace: Workspace) {
    let problem = Workspace::write(&workspace.inputs, "input_0.txt", PROBLEM);
    let plan = Workspace::write(&workspace.outputs, "output_0.json", DELIVERY);
    let evaluation = evaluate_files(&problem, &plan).expect("evaluate files");
    assert_eq!(evaluation.score.to_string(), "5");
}

#[rstest]
fn plans_naming_missing_vehicles_are_malformed(workspace: Workspace) {
    let problem = Workspace::write(&workspace.inputs, "input_0.txt", PROBLEM);
    let plan = Workspace::write(
        &workspace.outputs,
        "output_0.json",
        r#"{"commands": [{"2": "IDLE"}]}"#,
    );
    let err = evaluate_files(&problem, &plan).expect_err("vehicle 2 does not exist");
    assert!(matches!(
        err,
        EvaluationError::MalformedPlan {
            source: PlanParseError::Plan(_),
            ..
        }
    ));
}

#[rstest]
fn inputs_pair_with_outputs_by_name(workspace: Workspace) {
    for name in [
        "input_10.txt",
        "input_2.txt",
        "input_old.txt.txt",
        "notes.md",
        ".input_9.txt",
    ] {
        Workspace::write(&workspace.inputs, name, PROBLEM);
    }
    let cases = pair_inputs(&workspace.inputs, &workspace.outputs).expect("pair inputs");
    let pairs: Vec<_> = cases
        .iter()
        .map(|case| (case.name(), case.output.file_name()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("input_10.txt", Some("output_10.json")),
            ("input_2.txt", Some("output_2.json")),
            ("input_old.txt.txt", Some("output_old.txt.json")),
        ]
    );
}

#[rstest]
fn pairing_requires_a_directory(workspace: Workspace) {
    let file = Workspace::write(&workspace.inputs, "input_0.txt", PROBLEM);
    assert!(matches!(
        pair_inputs(&file, &workspace.outputs),
        Err(EvaluationError::InputsNotDirectory { .. })
    ));
    assert!(matches!(
        pair_inputs(&workspace.inputs.join("absent"), &workspace.outputs),
        Err(EvaluationError::ListInputs { .. })
    ));
}

#[rstest]
#[case(true)]
#[case(false)]
fn batch_skips_broken_cases_and_sums_the_rest(workspace: Workspace, #[case] parallel: bool) {
    Workspace::write(&workspace.inputs, "input_0.txt", PROBLEM);
    Workspace::write(&workspace.outputs, "output_0.json", DELIVERY);
    Workspace::write(&workspace.inputs, "input_1.txt", "2 1 1 1\n0\n0 1 1\n0 0 1\n");
    Workspace::write(
        &workspace.outputs,
        "output_1.json",
        r#"{"commands": [{"1": "PICK UP"}, {"1": "GO 0 1"}, {"1": "DROP"}]}"#,
    );
    Workspace::write(&workspace.inputs, "input_2.txt", PROBLEM);
    Workspace::write(&workspace.inputs, "input_3.txt", PROBLEM);
    Workspace::write(&workspace.outputs, "output_3.json", r#"{"commands": [{"1": "FLY"}]}"#);

    let options = BatchOptions {
        parallel,
        ..BatchOptions::default()
    };
    let report = evaluate_batch(&workspace.inputs, &workspace.outputs, options).expect("batch");

    let names: Vec<_> = report.cases.iter().map(|r| r.case.name()).collect();
    assert_eq!(names, ["input_0.txt", "input_1.txt", "input_2.txt", "input_3.txt"]);
    assert_eq!(report.scored().count(), 2);
    let skipped: Vec<_> = report.skipped().map(|(case, _)| case.name()).collect();
    assert_eq!(skipped, ["input_2.txt", "input_3.txt"]);
    assert_eq!(report.total(), Score::completed(8));
}

#[rstest]
fn infinite_case_makes_the_total_infinite(workspace: Workspace) {
    Workspace::write(&workspace.inputs, "input_0.txt", PROBLEM);
    Workspace::write(&workspace.outputs, "output_0.json", DELIVERY);
    Workspace::write(&workspace.inputs, "input_1.txt", PROBLEM);
    Workspace::write(&workspace.outputs, "output_1.json", r#"{"commands": [{"1": "DROP"}]}"#);

    let report = evaluate_batch(&workspace.inputs, &workspace.outputs, BatchOptions::default())
        .expect("batch");
    assert_eq!(report.scored().count(), 2);
    assert!(!report.total().is_finite());
}
