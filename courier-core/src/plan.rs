//! Per-step command plans.

use thiserror::Error;

use crate::command::StepCommands;
use crate::task::VehicleId;

/// Errors returned by [`CommandPlan::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A step addresses a vehicle that does not exist.
    #[error("step {step} addresses vehicle {vehicle}, but only {vehicle_count} vehicles exist")]
    VehicleOutOfRange {
        /// Zero-based step index.
        step: usize,
        /// Zero-based vehicle id.
        vehicle: VehicleId,
        /// Number of vehicles in the problem.
        vehicle_count: usize,
    },
}

/// An ordered sequence of per-step command maps.
///
/// Every vehicle id has been checked against the problem's vehicle count, so
/// the simulator never sees an unknown vehicle from a validated plan.
///
/// # Examples
///
/// ```
/// use courier_core::{Command, CommandPlan, StepCommands};
///
/// let step = StepCommands::from([(0, Command::PickUp)]);
/// let plan = CommandPlan::new(vec![step], 1).unwrap();
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.get(0).and_then(|s| s.get(&0)), Some(&Command::PickUp));
///
/// let bad = StepCommands::from([(3, Command::Idle)]);
/// assert!(CommandPlan::new(vec![bad], 1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPlan {
    steps: Vec<StepCommands>,
}

impl CommandPlan {
    /// Validate and construct a plan for a fleet of `vehicle_count` vehicles.
    ///
    /// # Errors
    /// Returns [`PlanError::VehicleOutOfRange`] for the first step that
    /// references a vehicle id outside `0..vehicle_count`.
    pub fn new(steps: Vec<StepCommands>, vehicle_count: usize) -> Result<Self, PlanError> {
        for (step, commands) in steps.iter().enumerate() {
            if let Some(&vehicle) = commands.keys().find(|&&vehicle| vehicle >= vehicle_count) {
                return Err(PlanError::VehicleOutOfRange {
                    step,
                    vehicle,
                    vehicle_count,
                });
            }
        }
        Ok(Self { steps })
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Commands for `step`, if the plan is long enough.
    #[must_use]
    pub fn get(&self, step: usize) -> Option<&StepCommands> {
        self.steps.get(step)
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepCommands> {
        self.steps.iter()
    }

    /// Consume the plan, returning the raw step maps.
    #[must_use]
    pub fn into_steps(self) -> Vec<StepCommands> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a CommandPlan {
    type Item = &'a StepCommands;
    type IntoIter = std::slice::Iter<'a, StepCommands>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
