//! Core simulation engine for the courier fleet evaluator.
//!
//! A [`Problem`] describes a weighted graph, vehicle start nodes and a list
//! of time-released pickup-and-delivery tasks. A [`CommandPlan`] assigns one
//! [`Command`] per vehicle per step. The [`Simulator`] replays the plan over
//! immutable [`WorldState`] snapshots and derives a [`Score`]: the step at
//! which the last task was delivered, or infinity if any command broke the
//! rules or the plan ended early.
//!
//! Command-validity problems are values, never panics: a rejected step is
//! reported as a [`StepError`] and remembered by the simulator.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod command;
mod graph;
mod plan;
mod problem;
mod score;
mod simulator;
mod state;
mod task;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use command::{Command, CommandParseError, StepCommands};
pub use graph::{Graph, NodeId, Weight};
pub use plan::{CommandPlan, PlanError};
pub use problem::Problem;
pub use score::Score;
pub use simulator::{ApplyOutcome, RejectedStep, Simulator, replay};
pub use state::{InvalidCommandKind, StepError, WorldState};
pub use task::{Task, TaskIndex, TaskStatus, Time, VehicleId, VehiclePosition};
