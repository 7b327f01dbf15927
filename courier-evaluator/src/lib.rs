//! Plan evaluation for the courier engine.
//!
//! Wraps the simulator from `courier-core` with file loading from
//! `courier-data`:
//! - [`evaluate`] and [`evaluate_files`] score a single plan.
//! - [`evaluate_batch`] scores a directory of problems against a directory
//!   of plan documents, in parallel, and sums the results.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use courier_evaluator::{BatchOptions, evaluate_batch};
//!
//! let report = evaluate_batch(
//!     Utf8Path::new("inputs"),
//!     Utf8Path::new("outputs"),
//!     BatchOptions::default(),
//! )
//! .expect("list inputs");
//! println!("total: {}", report.total());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod batch;
mod error;
mod evaluate;

pub use batch::{BatchOptions, BatchReport, CasePaths, CaseReport, evaluate_batch, pair_inputs};
pub use error::EvaluationError;
pub use evaluate::{
    Evaluation, evaluate, evaluate_files, evaluate_files_with_budget, evaluate_with_budget,
};

#[cfg(test)]
mod tests;
