//! Builders and invariant checks shared by unit, behaviour and property tests.

use std::collections::BTreeSet;

use crate::{
    Command, CommandPlan, Graph, Problem, StepCommands, Task, TaskStatus, VehicleId, Weight,
    WorldState,
};

/// Two nodes joined by one edge of `weight`, one vehicle at node 0 and one
/// task released at time 0 travelling from node 0 to node 1.
#[must_use]
pub fn single_edge_problem(weight: Weight) -> Problem {
    Problem::new(
        Graph::from_edges([(0, 1, weight)]),
        vec![0],
        vec![Task::new(0, 0, 1)],
    )
}

/// Commands for a single step, keyed by vehicle.
pub fn step<I>(entries: I) -> StepCommands
where
    I: IntoIterator<Item = (VehicleId, Command)>,
{
    entries.into_iter().collect()
}

/// A plan driving vehicle 0 alone, one command per step.
///
/// # Panics
/// Panics if `vehicle_count` is zero.
#[must_use]
pub fn solo_plan(commands: &[Command], vehicle_count: usize) -> CommandPlan {
    let steps = commands
        .iter()
        .map(|&command| step([(0, command)]))
        .collect();
    match CommandPlan::new(steps, vehicle_count) {
        Ok(plan) => plan,
        Err(err) => panic!("solo plan needs at least one vehicle: {err}"),
    }
}

/// Verify the snapshot invariants, describing the first violation found.
///
/// # Errors
/// Returns a human-readable description of the broken invariant.
pub fn check_invariants(state: &WorldState) -> Result<(), String> {
    let mut carried = BTreeSet::new();
    for (vehicle, position) in state.vehicle_positions().iter().enumerate() {
        let in_transit = !position.is_at_rest();
        if in_transit != state.edge_entry_time(vehicle).is_some() {
            return Err(format!(
                "vehicle {vehicle} at {position} has mismatched edge entry time"
            ));
        }
        if let Some(task) = state.active_task(vehicle)
            && !carried.insert(task)
        {
            return Err(format!("task {task} is carried by more than one vehicle"));
        }
    }
    for (index, task) in state.tasks().iter().enumerate() {
        let is_carried = carried.contains(&index);
        if (task.status == TaskStatus::Picked) != is_carried {
            return Err(format!(
                "task {index} has status {:?} but carried={is_carried}",
                task.status
            ));
        }
    }
    Ok(())
}
