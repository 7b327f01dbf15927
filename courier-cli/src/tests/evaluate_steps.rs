//! Behaviour-driven step definitions driving the evaluate CLI scenarios.

use super::helpers::{EARLY_DROP, SLOW_DELIVERY, SLOW_EDGE, Workspace};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct EvaluateWorld {
    workspace: Workspace,
    include_plan: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl EvaluateWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_plan: RefCell::new(false),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "courier".to_owned(),
            "evaluate".to_owned(),
            self.workspace.path("input_0.txt").into_string(),
        ];
        if *self.include_plan.borrow() {
            argv.extend([
                format!("--{ARG_PLAN}"),
                self.workspace.path("output_0.json").into_string(),
            ]);
        }
        argv
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> EvaluateWorld {
    EvaluateWorld::new()
}

#[given("a problem with one slow edge")]
fn problem_with_slow_edge(#[from(world)] world: &EvaluateWorld) {
    world.workspace.write("input_0.txt", SLOW_EDGE);
}

#[given("a plan that delivers the task")]
fn plan_delivers(#[from(world)] world: &EvaluateWorld) {
    world.workspace.write("output_0.json", SLOW_DELIVERY);
    world.include_plan.replace(true);
}

#[given("a plan that drops before picking up")]
fn plan_drops_early(#[from(world)] world: &EvaluateWorld) {
    world.workspace.write("output_0.json", EARLY_DROP);
    world.include_plan.replace(true);
}

#[when("I run the evaluate command")]
fn run_evaluate_command(#[from(world)] world: &EvaluateWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        dispatch(cli.command, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the completion time")]
fn prints_completion_time(#[from(world)] world: &EvaluateWorld) {
    world.expect_success();
    assert_eq!(world.stdout_text(), "score: 5\n");
}

#[then("the command prints an infinite score and the rejected step")]
fn prints_infinite_score(#[from(world)] world: &EvaluateWorld) {
    world.expect_success();
    let stdout = world.stdout_text();
    assert!(stdout.starts_with("score: inf\nfirst rejected step 0: "));
    assert!(stdout.contains("vehicle carries no task"));
}

#[then("the command fails because the plan path is missing")]
fn fails_missing_plan(#[from(world)] world: &EvaluateWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_evaluate_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/evaluate_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: EvaluateWorld) {
            let _ = world;
        }
    };
}

register_evaluate_scenario!(evaluate_valid_plan, "scoring a valid plan");
register_evaluate_scenario!(evaluate_invalid_plan, "scoring a plan that breaks the rules");
register_evaluate_scenario!(evaluate_missing_plan, "rejecting a missing plan path");
