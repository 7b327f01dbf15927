//! Single-instance evaluation.

use camino::Utf8Path;
use courier_core::{CommandPlan, Problem, RejectedStep, Score, Simulator, Time};
use courier_data::{read_plan_document, read_problem};
use log::debug;

use crate::error::EvaluationError;

/// Outcome of replaying one plan against one problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Completion time, or infinity.
    pub score: Score,
    /// Time at which every task was first delivered, even if the plan was
    /// rejected earlier.
    pub completion_time: Option<Time>,
    /// Steps fed to the simulator after any budget truncation, rejected
    /// ones included.
    pub steps_seen: usize,
    /// First rejected step, if any.
    pub first_error: Option<RejectedStep>,
}

impl Evaluation {
    /// Whether every step was accepted.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.first_error.is_none()
    }

    fn from_simulator(simulator: &Simulator) -> Self {
        Self {
            score: simulator.score(),
            completion_time: simulator.completion_time(),
            steps_seen: simulator.steps_seen(),
            first_error: simulator.first_rejection().cloned(),
        }
    }
}

/// Replay `plan` against `problem` and score it.
///
/// # Examples
///
/// ```
/// use courier_core::{Command, CommandPlan, Graph, Problem, StepCommands, Task};
/// use courier_evaluator::evaluate;
///
/// let problem = Problem::new(Graph::from_edges([(0, 1, 1)]), vec![0], vec![Task::new(0, 0, 1)]);
/// let steps = [Command::PickUp, Command::Go { from: 0, to: 1 }, Command::Drop]
///     .into_iter()
///     .map(|command| StepCommands::from([(0, command)]))
///     .collect();
/// let plan = CommandPlan::new(steps, 1).unwrap();
/// assert_eq!(evaluate(&problem, &plan).score.to_string(), "3");
/// ```
#[must_use]
pub fn evaluate(problem: &Problem, plan: &CommandPlan) -> Evaluation {
    evaluate_with_budget(problem, plan, None)
}

/// Like [`evaluate`], but replay at most `max_steps` steps.
///
/// A plan that has not delivered every task within the budget scores
/// infinity.
#[must_use]
pub fn evaluate_with_budget(
    problem: &Problem,
    plan: &CommandPlan,
    max_steps: Option<usize>,
) -> Evaluation {
    let mut simulator = Simulator::for_problem(problem);
    if let Some(budget) = max_steps
        && plan.len() > budget
    {
        debug!("truncating plan of {} steps to {budget}", plan.len());
    }
    simulator.run(plan, max_steps);
    Evaluation::from_simulator(&simulator)
}

/// Load a problem file and a plan document, then evaluate.
///
/// # Errors
/// Returns [`EvaluationError`] when either file cannot be read or the plan
/// does not fit the problem's fleet. Rule violations are scored, not raised.
pub fn evaluate_files(
    problem_path: &Utf8Path,
    plan_path: &Utf8Path,
) -> Result<Evaluation, EvaluationError> {
    evaluate_files_with_budget(problem_path, plan_path, None)
}

/// Like [`evaluate_files`], with an optional step budget.
///
/// # Errors
/// See [`evaluate_files`].
pub fn evaluate_files_with_budget(
    problem_path: &Utf8Path,
    plan_path: &Utf8Path,
    max_steps: Option<usize>,
) -> Result<Evaluation, EvaluationError> {
    let problem = read_problem(problem_path)?;
    let plan = read_plan_document(plan_path)?
        .into_plan(problem.vehicle_count())
        .map_err(|source| EvaluationError::MalformedPlan {
            path: plan_path.to_path_buf(),
            source,
        })?;
    Ok(evaluate_with_budget(&problem, &plan, max_steps))
}
