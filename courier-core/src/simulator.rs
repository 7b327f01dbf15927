//! Replay a command plan and derive its score.
//!
//! The [`Simulator`] keeps the latest [`WorldState`] and two sticky facts: whether
//! any step was ever rejected and the first time every task was delivered.
//! A rejected step leaves the state where it was, so replay continues against
//! the last good snapshot; only the final [`Score`] reflects the violation.

use log::debug;

use crate::command::StepCommands;
use crate::plan::CommandPlan;
use crate::problem::Problem;
use crate::score::Score;
use crate::state::{StepError, WorldState};
use crate::task::Time;

/// Result of feeding one step to the [`Simulator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The step was accepted and no earlier step was rejected.
    Applied,
    /// The step was accepted, but an earlier rejection already ruined the run.
    AlreadyInvalid,
    /// The step was rejected; the state did not advance.
    Rejected(StepError),
}

/// The first rejected step of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedStep {
    /// Zero-based index of the step within the replay.
    pub step: usize,
    /// Why the step was rejected.
    pub error: StepError,
}

/// Drives a [`WorldState`] through a plan one step at a time.
///
/// # Examples
///
/// ```
/// use courier_core::{Command, Graph, Problem, Score, Simulator, StepCommands, Task, WorldState};
///
/// let problem = Problem::new(Graph::from_edges([(0, 1, 1)]), vec![0], vec![Task::new(0, 0, 1)]);
/// let mut simulator = Simulator::new(WorldState::initial(&problem));
/// for command in [Command::PickUp, Command::Go { from: 0, to: 1 }, Command::Drop] {
///     simulator.apply(&StepCommands::from([(0, command)]));
/// }
/// assert_eq!(simulator.score(), Score::completed(3));
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    state: WorldState,
    steps_seen: usize,
    first_rejection: Option<RejectedStep>,
    completion_time: Option<Time>,
}

impl Simulator {
    /// Start a replay from `state`.
    #[must_use]
    pub const fn new(state: WorldState) -> Self {
        Self {
            state,
            steps_seen: 0,
            first_rejection: None,
            completion_time: None,
        }
    }

    /// Start a replay from the initial snapshot of `problem`.
    #[must_use]
    pub fn for_problem(problem: &Problem) -> Self {
        Self::new(WorldState::initial(problem))
    }

    /// Feed one step of commands.
    ///
    /// On success the state advances and the completion time is recorded the
    /// first time every task is dropped. On failure the run is marked invalid
    /// for good and the state stays put.
    pub fn apply(&mut self, commands: &StepCommands) -> ApplyOutcome {
        let step = self.steps_seen;
        self.steps_seen += 1;
        match self.state.step(commands) {
            Ok(next) => {
                self.state = next;
                if self.completion_time.is_none() && self.state.is_terminated() {
                    self.completion_time = Some(self.state.current_time());
                }
                if self.is_invalid() {
                    ApplyOutcome::AlreadyInvalid
                } else {
                    ApplyOutcome::Applied
                }
            }
            Err(error) => {
                debug!("step {step} rejected: {error}");
                if self.first_rejection.is_none() {
                    self.first_rejection = Some(RejectedStep {
                        step,
                        error: error.clone(),
                    });
                }
                ApplyOutcome::Rejected(error)
            }
        }
    }

    /// Feed every step of `plan`, stopping after `max_steps` when given.
    pub fn run(&mut self, plan: &CommandPlan, max_steps: Option<usize>) {
        let budget = max_steps.unwrap_or(usize::MAX);
        for commands in plan.iter().take(budget) {
            if let ApplyOutcome::Rejected(error) = self.apply(commands) {
                debug!("continuing replay after rejection: {}", error.kind);
            }
        }
    }

    /// Latest accepted snapshot.
    #[must_use]
    pub const fn state(&self) -> &WorldState {
        &self.state
    }

    /// Whether any step has been rejected.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.first_rejection.is_some()
    }

    /// Whether every task has been dropped in the latest snapshot.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Time at which every task was first dropped.
    #[must_use]
    pub const fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    /// Number of steps fed so far, accepted or not.
    #[must_use]
    pub const fn steps_seen(&self) -> usize {
        self.steps_seen
    }

    /// The first rejected step, if any.
    #[must_use]
    pub const fn first_rejection(&self) -> Option<&RejectedStep> {
        self.first_rejection.as_ref()
    }

    /// Final score: infinite when any step was rejected or the tasks were
    /// never all delivered, otherwise the completion time.
    #[must_use]
    pub fn score(&self) -> Score {
        match (self.is_invalid(), self.completion_time) {
            (false, Some(time)) => Score::completed(time),
            _ => Score::INFINITE,
        }
    }
}

/// Replay a whole plan against `problem` and return the finished simulator.
#[must_use]
pub fn replay(problem: &Problem, plan: &CommandPlan) -> Simulator {
    let mut simulator = Simulator::for_problem(problem);
    simulator.run(plan, None);
    simulator
}
