//! Pickup-and-delivery tasks and vehicle positions.

use crate::graph::NodeId;

/// Simulation time, counted in whole steps from zero.
pub type Time = u64;

/// Position of a task in the problem's task list.
pub type TaskIndex = usize;

/// Zero-based vehicle identity.
pub type VehicleId = usize;

/// Lifecycle of a task. Transitions only move forward:
/// `Pending -> Picked -> Dropped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    /// Waiting at its start node.
    #[default]
    Pending,
    /// Carried by exactly one vehicle.
    Picked,
    /// Delivered to its end node.
    Dropped,
}

/// A transport request released at a given time.
///
/// # Examples
///
/// ```
/// use courier_core::{Task, TaskStatus};
///
/// let task = Task::new(3, 0, 4);
/// assert_eq!(task.status, TaskStatus::Pending);
/// assert!(!task.is_available(2));
/// assert!(task.is_available(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    /// First step at which the task may be scheduled for pickup.
    pub release_time: Time,
    /// Node where the task waits for pickup.
    pub start_node: NodeId,
    /// Node where the task must be dropped.
    pub end_node: NodeId,
    /// Current lifecycle stage.
    pub status: TaskStatus,
}

impl Task {
    /// Construct a pending task.
    #[must_use]
    pub const fn new(release_time: Time, start_node: NodeId, end_node: NodeId) -> Self {
        Self {
            release_time,
            start_node,
            end_node,
            status: TaskStatus::Pending,
        }
    }

    /// Whether the task has been released by `time`.
    #[must_use]
    pub const fn is_released(&self, time: Time) -> bool {
        self.release_time <= time
    }

    /// Whether the task is released and still waiting for pickup at `time`.
    #[must_use]
    pub fn is_available(&self, time: Time) -> bool {
        self.is_released(time) && self.status == TaskStatus::Pending
    }
}

/// Where a vehicle is: resting on a node or travelling along an edge.
///
/// `current == target` means the vehicle rests at `current`. Otherwise it is
/// mid-transit on the edge `current -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehiclePosition {
    /// Node the vehicle left, or rests on.
    pub current: NodeId,
    /// Node the vehicle is heading to; equal to `current` when at rest.
    pub target: NodeId,
}

impl VehiclePosition {
    /// A vehicle resting on `node`.
    #[must_use]
    pub const fn at_rest(node: NodeId) -> Self {
        Self {
            current: node,
            target: node,
        }
    }

    /// A vehicle travelling from `current` to `target`.
    #[must_use]
    pub const fn in_transit(current: NodeId, target: NodeId) -> Self {
        Self { current, target }
    }

    /// Whether the vehicle rests on a node.
    #[must_use]
    pub const fn is_at_rest(&self) -> bool {
        self.current == self.target
    }

    /// The node the vehicle rests on, or `None` while travelling.
    #[must_use]
    pub const fn resting_node(&self) -> Option<NodeId> {
        if self.is_at_rest() {
            Some(self.current)
        } else {
            None
        }
    }

    /// Whether the vehicle rests exactly on `node`.
    #[must_use]
    pub const fn rests_on(&self, node: NodeId) -> bool {
        self.current == node && self.target == node
    }
}

impl std::fmt::Display for VehiclePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_at_rest() {
            write!(f, "node {}", self.current)
        } else {
            write!(f, "edge {}->{}", self.current, self.target)
        }
    }
}
