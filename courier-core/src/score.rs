//! Minimisation objective for replayed plans.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::task::Time;

/// Completion time of a plan, or infinity when the plan is invalid or never
/// delivers every task. Lower is better.
///
/// Scores add up across problem instances; any infinite score makes the
/// total infinite.
///
/// # Examples
///
/// ```
/// use courier_core::Score;
///
/// let total: Score = [Score::completed(5), Score::completed(7)].into_iter().sum();
/// assert_eq!(total, Score::completed(12));
/// assert!(!(total + Score::INFINITE).is_finite());
/// assert_eq!(Score::INFINITE.to_string(), "inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// The worst possible score.
    pub const INFINITE: Self = Self(f64::INFINITY);

    /// The zero score, identity for summation.
    pub const ZERO: Self = Self(0.0);

    /// Score of a plan that delivered every task by `time`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "completion times are far below 2^52 steps"
    )]
    pub const fn completed(time: Time) -> Self {
        Self(time as f64)
    }

    /// Raw objective value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the plan completed.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Score {
    type Output = Self;

    #[expect(
        clippy::float_arithmetic,
        reason = "scores aggregate as plain sums so infinity propagates"
    )]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
