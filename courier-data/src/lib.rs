//! Data adapters for the courier engine.
//!
//! Responsibilities:
//! - Read and write the line-oriented problem text format.
//! - Convert plan documents (JSON) into typed [`CommandPlan`](courier_core::CommandPlan)s and back.
//! - Generate random, reproducible problem instances.
//!
//! Boundaries:
//! - Do not encode simulation rules (live in `courier-core`).
//! - Fail fast: malformed inputs are errors here, never scored.

#![forbid(unsafe_code)]

pub mod generate;
pub mod plan;
pub mod problem;

pub use generate::{GenerateError, GeneratorConfig, generate_problem, generate_problem_set};
pub use plan::{
    PlanDocument, PlanParseError, ReadPlanError, WritePlanError, read_plan_document,
    write_plan_document,
};
pub use problem::{
    ProblemParseError, ReadProblemError, WriteProblemError, parse_problem, read_problem,
    render_problem, save_problem, write_problem,
};
