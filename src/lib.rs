//! Facade crate for the courier fleet evaluation engine.
//!
//! This crate re-exports the simulation types and data adapters, and exposes
//! file and batch evaluation behind the `evaluator` feature.

#![forbid(unsafe_code)]

pub use courier_core::{
    ApplyOutcome, Command, CommandParseError, CommandPlan, Graph, InvalidCommandKind, NodeId,
    PlanError, Problem, RejectedStep, Score, Simulator, StepCommands, StepError, Task, TaskIndex,
    TaskStatus, Time, VehicleId, VehiclePosition, Weight, WorldState, replay,
};

pub use courier_data::{
    GeneratorConfig, PlanDocument, generate_problem, parse_problem, read_plan_document,
    read_problem,
};

#[cfg(feature = "evaluator")]
pub use courier_evaluator::{
    BatchOptions, BatchReport, Evaluation, EvaluationError, evaluate, evaluate_batch,
    evaluate_files,
};
