//! Behavioural coverage for replaying whole plans through the simulator.

use std::cell::RefCell;

use courier_core::test_support::{single_edge_problem, solo_plan};
use courier_core::{Command, Problem, Score, Simulator, VehiclePosition, replay};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const GO_0_1: Command = Command::Go { from: 0, to: 1 };

#[derive(Debug, Default)]
struct ReplayWorld {
    problem: RefCell<Option<Problem>>,
    commands: RefCell<Vec<Command>>,
    simulator: RefCell<Option<Simulator>>,
}

impl ReplayWorld {
    fn use_edge(&self, weight: u32) {
        self.problem.replace(Some(single_edge_problem(weight)));
    }

    fn use_plan(&self, commands: &[Command]) {
        self.commands.replace(commands.to_vec());
    }

    fn with_simulator<T>(&self, inspect: impl FnOnce(&Simulator) -> T) -> T {
        let borrowed = self.simulator.borrow();
        let simulator = borrowed
            .as_ref()
            .unwrap_or_else(|| panic!("plan must be replayed first"));
        inspect(simulator)
    }
}

#[fixture]
fn world() -> ReplayWorld {
    ReplayWorld::default()
}

#[given("a two-node line joined by an edge of weight 3")]
fn heavy_edge(#[from(world)] world: &ReplayWorld) {
    world.use_edge(3);
}

#[given("a two-node line joined by an edge of weight 1")]
fn unit_edge(#[from(world)] world: &ReplayWorld) {
    world.use_edge(1);
}

#[given("a plan that picks up, travels and drops")]
fn full_delivery(#[from(world)] world: &ReplayWorld) {
    world.use_plan(&[
        Command::PickUp,
        GO_0_1,
        Command::Forward,
        Command::Forward,
        Command::Drop,
    ]);
}

#[given("a plan that travels and drops without picking up")]
fn missing_pickup(#[from(world)] world: &ReplayWorld) {
    world.use_plan(&[GO_0_1, Command::Forward, Command::Forward, Command::Drop]);
}

#[given("a plan that picks up, goes once and drops")]
fn unit_delivery(#[from(world)] world: &ReplayWorld) {
    world.use_plan(&[Command::PickUp, GO_0_1, Command::Drop]);
}

#[given("a plan that stops while travelling")]
fn stops_early(#[from(world)] world: &ReplayWorld) {
    world.use_plan(&[Command::PickUp, GO_0_1, Command::Forward]);
}

#[when("I replay the plan")]
fn replay_plan(#[from(world)] world: &ReplayWorld) {
    let problem = world
        .problem
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("problem must be configured"));
    let plan = solo_plan(&world.commands.borrow(), problem.vehicle_count());
    world.simulator.replace(Some(replay(&problem, &plan)));
}

#[then("the vehicle rests on node 1")]
fn rests_on_target(#[from(world)] world: &ReplayWorld) {
    let position = world.with_simulator(|simulator| simulator.state().vehicle_position(0));
    assert_eq!(position, Some(VehiclePosition::at_rest(1)));
}

#[then("the vehicle is still travelling")]
fn still_travelling(#[from(world)] world: &ReplayWorld) {
    let position = world.with_simulator(|simulator| simulator.state().vehicle_position(0));
    assert_eq!(position, Some(VehiclePosition::in_transit(0, 1)));
}

#[then("the plan scores 5")]
fn scores_five(#[from(world)] world: &ReplayWorld) {
    assert_eq!(world.with_simulator(Simulator::score), Score::completed(5));
}

#[then("the plan scores 3")]
fn scores_three(#[from(world)] world: &ReplayWorld) {
    assert_eq!(world.with_simulator(Simulator::score), Score::completed(3));
}

#[then("the plan scores infinity")]
fn scores_infinity(#[from(world)] world: &ReplayWorld) {
    assert_eq!(world.with_simulator(Simulator::score), Score::INFINITE);
}

macro_rules! register_replay_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/replay.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ReplayWorld) {
            let _ = world;
        }
    };
}

register_replay_scenario!(
    delivery_scores_drop_time,
    "Delivering after a pickup scores the drop time"
);
register_replay_scenario!(
    drop_without_pickup,
    "Dropping without a pickup is never scored"
);
register_replay_scenario!(unit_edges_arrive, "Unit edges arrive without forwarding");
register_replay_scenario!(early_stop, "A plan that stops early scores infinity");
