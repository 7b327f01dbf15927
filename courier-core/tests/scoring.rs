//! Scoring rules exercised through the public replay API.

use courier_core::test_support::{single_edge_problem, solo_plan, step};
use courier_core::{
    Command, CommandPlan, Graph, Problem, Score, StepCommands, Task, TaskStatus, replay,
};
use rstest::{fixture, rstest};

/// Two vehicles on a triangle; two tasks share start node 1.
#[fixture]
fn triangle() -> Problem {
    let graph = Graph::from_edges([(0, 1, 2), (1, 2, 1), (2, 0, 5), (0, 1, 9)]);
    Problem::new(
        graph,
        vec![1, 0],
        vec![Task::new(0, 1, 2), Task::new(3, 1, 0)],
    )
}

fn plan(steps: Vec<StepCommands>, vehicles: usize) -> CommandPlan {
    CommandPlan::new(steps, vehicles).expect("vehicle ids are in range")
}

#[rstest]
fn idle_until_release_then_deliver(triangle: Problem) {
    // Vehicle 0 delivers task 0 at once; vehicle 1 idles until task 1 is
    // released, walks to node 1, then carries it back to node 0.
    let steps = vec![
        step([(0, Command::PickUp), (1, Command::Go { from: 0, to: 1 })]),
        step([(0, Command::Go { from: 1, to: 2 }), (1, Command::Forward)]),
        step([(0, Command::Drop), (1, Command::Idle)]),
        step([(1, Command::PickUp)]),
        step([(1, Command::Go { from: 1, to: 0 })]),
        step([(1, Command::Forward)]),
        step([(1, Command::Drop)]),
    ];
    let simulator = replay(&triangle, &plan(steps, 2));
    assert!(!simulator.is_invalid());
    assert_eq!(simulator.score(), Score::completed(7));
    assert!(
        simulator
            .state()
            .tasks()
            .iter()
            .all(|task| task.status == TaskStatus::Dropped)
    );
}

#[rstest]
#[case::pick_up_without_task(vec![Command::Go { from: 0, to: 1 }, Command::PickUp])]
#[case::drop_without_task(vec![Command::Drop])]
#[case::forward_at_rest(vec![Command::Forward])]
fn rule_violations_score_infinity(#[case] commands: Vec<Command>) {
    let problem = single_edge_problem(1);
    let simulator = replay(&problem, &solo_plan(&commands, 1));
    assert!(simulator.is_invalid());
    assert_eq!(simulator.score(), Score::INFINITE);
}

#[rstest]
fn valid_tail_cannot_repair_a_rejection() {
    let problem = single_edge_problem(1);
    let plan = solo_plan(
        &[
            Command::Drop,
            Command::PickUp,
            Command::Go { from: 0, to: 1 },
            Command::Drop,
        ],
        1,
    );
    let simulator = replay(&problem, &plan);
    assert!(simulator.is_terminated());
    assert_eq!(simulator.completion_time(), Some(3));
    assert_eq!(simulator.score(), Score::INFINITE);
}

#[rstest]
fn shared_start_node_pickup_is_reproducible(triangle: Problem) {
    let plan = plan(vec![step([(0, Command::PickUp)])], 2);
    for _ in 0..3 {
        let simulator = replay(&triangle, &plan);
        assert_eq!(simulator.state().active_task(0), Some(0));
    }
}

#[rstest]
fn duplicate_edges_use_the_shorter_weight(triangle: Problem) {
    // The 0-1 edge was listed with weights 2 and 9; weight 2 needs one FORWARD.
    let plan = plan(
        vec![
            step([(1, Command::Go { from: 0, to: 1 })]),
            step([(1, Command::Forward)]),
        ],
        2,
    );
    let simulator = replay(&triangle, &plan);
    assert_eq!(
        simulator.state().vehicle_position(1).map(|p| p.is_at_rest()),
        Some(true)
    );
}

#[rstest]
fn empty_plan_never_completes() {
    let problem = Problem::new(Graph::new(), vec![0], Vec::new());
    let simulator = replay(&problem, &CommandPlan::default());
    assert_eq!(simulator.score(), Score::INFINITE);
    let one_step = replay(&problem, &solo_plan(&[Command::Idle], 1));
    assert_eq!(one_step.score(), Score::completed(1));
}
