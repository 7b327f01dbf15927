//! Immutable simulation snapshots.
//!
//! A [`WorldState`] captures vehicle positions, task statuses, the current
//! time, edge entry times and carried tasks at a single step.
//! [`WorldState::step`] never mutates the snapshot it is called on: it builds
//! a successor that shares only the read-only [`Graph`] with its parent.
//!
//! Steps are all-or-nothing. Vehicles are processed in ascending id order and
//! the first failing command rejects the whole step with a [`StepError`].

mod error;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use error::{InvalidCommandKind, StepError};

use crate::command::{Command, StepCommands};
use crate::graph::{Graph, NodeId};
use crate::problem::Problem;
use crate::task::{Task, TaskIndex, TaskStatus, Time, VehicleId, VehiclePosition};

/// One snapshot of simulation progress.
///
/// Invariants upheld by [`WorldState::step`]:
/// - a vehicle carries at most one task;
/// - a task is [`TaskStatus::Picked`] iff exactly one vehicle carries it;
/// - a vehicle has an edge entry time iff it is mid-transit;
/// - time advances by exactly one per successful step.
///
/// # Examples
///
/// ```
/// use courier_core::{Command, Graph, Problem, StepCommands, Task, VehiclePosition, WorldState};
///
/// let problem = Problem::new(Graph::from_edges([(0, 1, 3)]), vec![0], vec![Task::new(0, 0, 1)]);
/// let start = WorldState::initial(&problem);
/// let moving = start
///     .step(&StepCommands::from([(0, Command::Go { from: 0, to: 1 })]))
///     .unwrap();
///
/// assert_eq!(moving.current_time(), 1);
/// assert_eq!(moving.vehicle_position(0), Some(VehiclePosition::in_transit(0, 1)));
/// assert_eq!(moving.edge_entry_time(0), Some(0));
/// // The parent snapshot is untouched.
/// assert_eq!(start.vehicle_position(0), Some(VehiclePosition::at_rest(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    graph: Arc<Graph>,
    positions: Vec<VehiclePosition>,
    tasks: Vec<Task>,
    current_time: Time,
    edge_entry: BTreeMap<VehicleId, Time>,
    active_tasks: BTreeMap<VehicleId, TaskIndex>,
}

impl WorldState {
    /// Snapshot at time zero: vehicles rest on their start nodes and every
    /// task is pending.
    #[must_use]
    pub fn initial(problem: &Problem) -> Self {
        let tasks = problem
            .tasks()
            .iter()
            .map(|task| Task {
                status: TaskStatus::Pending,
                ..*task
            })
            .collect();
        Self {
            graph: problem.shared_graph(),
            positions: problem.vehicle_positions(),
            tasks,
            current_time: 0,
            edge_entry: BTreeMap::new(),
            active_tasks: BTreeMap::new(),
        }
    }

    /// Apply one command per vehicle and return the successor snapshot.
    ///
    /// Vehicles missing from `commands` idle. The receiver is never modified.
    ///
    /// # Errors
    /// Returns [`StepError`] for the first vehicle, in id order, whose command
    /// violates its preconditions. No command of a rejected step takes effect.
    pub fn step(&self, commands: &StepCommands) -> Result<Self, StepError> {
        let mut next = self.clone();
        for (&vehicle, &command) in commands {
            next.apply(vehicle, command).map_err(|kind| StepError {
                time: self.current_time,
                vehicle,
                command,
                kind,
            })?;
        }
        next.current_time += 1;
        Ok(next)
    }

    fn apply(&mut self, vehicle: VehicleId, command: Command) -> Result<(), InvalidCommandKind> {
        let position = self
            .vehicle_position(vehicle)
            .ok_or(InvalidCommandKind::UnknownVehicle)?;
        match command {
            Command::Idle => Ok(()),
            Command::Forward => self.forward(vehicle, position),
            Command::Go { from, to } => self.go(vehicle, position, from, to),
            Command::PickUp => self.pick_up(vehicle, position),
            Command::Drop => self.drop_task(vehicle, position),
        }
    }

    fn forward(
        &mut self,
        vehicle: VehicleId,
        position: VehiclePosition,
    ) -> Result<(), InvalidCommandKind> {
        let entered = self
            .edge_entry
            .get(&vehicle)
            .copied()
            .ok_or(InvalidCommandKind::NotInTransit)?;
        let weight = self
            .graph
            .weight(position.current, position.target)
            .ok_or(InvalidCommandKind::NotAdjacent {
                from: position.current,
                to: position.target,
            })?;
        let elapsed = self.current_time.saturating_sub(entered) + 1;
        // A shorter elapsed time leaves the vehicle travelling; that is not an error.
        if elapsed >= Time::from(weight) {
            self.set_position(vehicle, VehiclePosition::at_rest(position.target));
            self.edge_entry.remove(&vehicle);
        }
        Ok(())
    }

    fn go(
        &mut self,
        vehicle: VehicleId,
        position: VehiclePosition,
        from: NodeId,
        to: NodeId,
    ) -> Result<(), InvalidCommandKind> {
        if !position.rests_on(from) {
            return Err(InvalidCommandKind::NotAtNode {
                expected: from,
                position,
            });
        }
        if from == to {
            return Err(InvalidCommandKind::SameNode { node: from });
        }
        let weight = self
            .graph
            .weight(from, to)
            .ok_or(InvalidCommandKind::NotAdjacent { from, to })?;
        if weight > 1 {
            self.set_position(vehicle, VehiclePosition::in_transit(from, to));
            self.edge_entry.insert(vehicle, self.current_time);
        } else {
            self.set_position(vehicle, VehiclePosition::at_rest(to));
        }
        Ok(())
    }

    fn pick_up(
        &mut self,
        vehicle: VehicleId,
        position: VehiclePosition,
    ) -> Result<(), InvalidCommandKind> {
        if let Some(&task) = self.active_tasks.get(&vehicle) {
            return Err(InvalidCommandKind::AlreadyCarrying { task });
        }
        let node = position
            .resting_node()
            .ok_or(InvalidCommandKind::NotAtRest { position })?;
        // Release time is the planner's concern; only the status is checked.
        let (index, task) = self
            .tasks
            .iter_mut()
            .enumerate()
            .find(|(_, task)| task.start_node == node && task.status == TaskStatus::Pending)
            .ok_or(InvalidCommandKind::NoTaskToPickUp { node })?;
        task.status = TaskStatus::Picked;
        self.active_tasks.insert(vehicle, index);
        Ok(())
    }

    fn drop_task(
        &mut self,
        vehicle: VehicleId,
        position: VehiclePosition,
    ) -> Result<(), InvalidCommandKind> {
        let index = self
            .active_tasks
            .get(&vehicle)
            .copied()
            .ok_or(InvalidCommandKind::NotCarrying)?;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(InvalidCommandKind::NotCarrying)?;
        if !position.rests_on(task.end_node) {
            return Err(InvalidCommandKind::NotAtDropNode {
                task: index,
                expected: task.end_node,
                position,
            });
        }
        task.status = TaskStatus::Dropped;
        self.active_tasks.remove(&vehicle);
        Ok(())
    }

    fn set_position(&mut self, vehicle: VehicleId, position: VehiclePosition) {
        if let Some(slot) = self.positions.get_mut(vehicle) {
            *slot = position;
        }
    }

    /// Whether every task has been dropped.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.tasks
            .iter()
            .all(|task| task.status == TaskStatus::Dropped)
    }

    /// Current simulation time.
    #[must_use]
    pub const fn current_time(&self) -> Time {
        self.current_time
    }

    /// The shared transport graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Position of `vehicle`, if it exists.
    #[must_use]
    pub fn vehicle_position(&self, vehicle: VehicleId) -> Option<VehiclePosition> {
        self.positions.get(vehicle).copied()
    }

    /// Positions of every vehicle, indexed by vehicle id.
    #[must_use]
    pub fn vehicle_positions(&self) -> &[VehiclePosition] {
        &self.positions
    }

    /// Tasks with their current statuses, in input order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Time at which `vehicle` entered its current edge, if mid-transit.
    #[must_use]
    pub fn edge_entry_time(&self, vehicle: VehicleId) -> Option<Time> {
        self.edge_entry.get(&vehicle).copied()
    }

    /// Task carried by `vehicle`, if any.
    #[must_use]
    pub fn active_task(&self, vehicle: VehicleId) -> Option<TaskIndex> {
        self.active_tasks.get(&vehicle).copied()
    }

    /// Tasks that are released and pending at the current time.
    pub fn available_tasks(&self) -> impl Iterator<Item = (TaskIndex, &Task)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.is_available(self.current_time))
    }
}
