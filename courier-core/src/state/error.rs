use thiserror::Error;

use crate::command::Command;
use crate::graph::NodeId;
use crate::task::{TaskIndex, Time, VehicleId, VehiclePosition};

/// Precondition violated by a single vehicle command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCommandKind {
    /// The vehicle id does not exist in this world.
    #[error("vehicle does not exist")]
    UnknownVehicle,
    /// `FORWARD` was issued while the vehicle was not on an edge.
    #[error("vehicle is not travelling along an edge")]
    NotInTransit,
    /// `GO` was issued away from its `from` node.
    #[error("vehicle is not resting on node {expected} (at {position})")]
    NotAtNode {
        /// Node named by the command.
        expected: NodeId,
        /// Where the vehicle actually is.
        position: VehiclePosition,
    },
    /// `GO` named nodes that share no edge.
    #[error("node {to} is not adjacent to node {from}")]
    NotAdjacent {
        /// Departure node.
        from: NodeId,
        /// Requested destination.
        to: NodeId,
    },
    /// `GO` named the same node at both ends.
    #[error("vehicle cannot travel from node {node} to itself")]
    SameNode {
        /// Node named twice.
        node: NodeId,
    },
    /// `PICK UP` was issued while travelling.
    #[error("vehicle cannot pick up while travelling ({position})")]
    NotAtRest {
        /// Where the vehicle actually is.
        position: VehiclePosition,
    },
    /// `PICK UP` was issued while already carrying a task.
    #[error("vehicle already carries task {task}")]
    AlreadyCarrying {
        /// Task currently carried.
        task: TaskIndex,
    },
    /// `PICK UP` found no pending task starting at the node.
    #[error("no pending task starts at node {node}")]
    NoTaskToPickUp {
        /// Node the vehicle rests on.
        node: NodeId,
    },
    /// `DROP` was issued without a carried task.
    #[error("vehicle carries no task")]
    NotCarrying,
    /// `DROP` was issued away from the carried task's end node.
    #[error("task {task} must be dropped at node {expected} (vehicle at {position})")]
    NotAtDropNode {
        /// Task being carried.
        task: TaskIndex,
        /// End node of the carried task.
        expected: NodeId,
        /// Where the vehicle actually is.
        position: VehiclePosition,
    },
}

/// A rejected step: the offending vehicle, command, and violated rule.
///
/// Any rejection aborts the whole step; no vehicle's command takes effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid command {command} for vehicle {vehicle} at time {time}: {kind}")]
pub struct StepError {
    /// Simulation time of the snapshot the step was applied to.
    pub time: Time,
    /// Zero-based vehicle id.
    pub vehicle: VehicleId,
    /// The command that failed.
    pub command: Command,
    /// Which precondition failed.
    pub kind: InvalidCommandKind,
}
