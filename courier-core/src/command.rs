//! Typed vehicle commands.
//!
//! Each simulation step carries at most one [`Command`] per vehicle. The
//! textual wire form (`"GO 0 1"`, `"PICK UP"`, ...) is handled by the
//! [`FromStr`] and [`Display`](std::fmt::Display) implementations so plan
//! adapters never deal with loosely typed argument lists.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::graph::NodeId;
use crate::task::VehicleId;

const IDLE: &str = "IDLE";
const FORWARD: &str = "FORWARD";
const PICK_UP: &str = "PICK UP";
const DROP: &str = "DROP";
const GO: &str = "GO";

/// A single vehicle instruction for one time step.
///
/// # Examples
///
/// ```
/// use courier_core::Command;
///
/// let go: Command = "GO 3 7".parse().unwrap();
/// assert_eq!(go, Command::Go { from: 3, to: 7 });
/// assert_eq!("PICK UP".parse::<Command>().unwrap(), Command::PickUp);
/// assert_eq!(Command::Forward.to_string(), "FORWARD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Take no action.
    Idle,
    /// Start traversing the edge `from -> to`.
    Go {
        /// Node the vehicle rests on.
        from: NodeId,
        /// Adjacent node to travel to.
        to: NodeId,
    },
    /// Continue an edge traversal already in progress.
    Forward,
    /// Pick up a pending task at the current node.
    PickUp,
    /// Deliver the carried task at the current node.
    Drop,
}

/// Commands for one step, keyed by vehicle. Missing vehicles idle.
pub type StepCommands = BTreeMap<VehicleId, Command>;

/// Errors returned when parsing a [`Command`] from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    /// The string is not one of the recognised commands.
    #[error("unrecognised command {0:?}")]
    Unrecognised(String),
    /// `GO` was not followed by exactly two node ids.
    #[error("GO expects two node ids, found {0:?}")]
    GoArity(String),
    /// A `GO` argument was not a non-negative integer.
    #[error("invalid node id {0:?} in GO command")]
    InvalidNode(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            IDLE => return Ok(Self::Idle),
            FORWARD => return Ok(Self::Forward),
            PICK_UP => return Ok(Self::PickUp),
            DROP => return Ok(Self::Drop),
            _ => {}
        }

        let mut tokens = raw.split_whitespace();
        if tokens.next() != Some(GO) {
            return Err(CommandParseError::Unrecognised(raw.to_owned()));
        }
        let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(CommandParseError::GoArity(raw.to_owned()));
        };
        Ok(Self::Go {
            from: parse_node(from)?,
            to: parse_node(to)?,
        })
    }
}

fn parse_node(token: &str) -> Result<NodeId, CommandParseError> {
    token
        .parse()
        .map_err(|_| CommandParseError::InvalidNode(token.to_owned()))
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str(IDLE),
            Self::Go { from, to } => write!(f, "{GO} {from} {to}"),
            Self::Forward => f.write_str(FORWARD),
            Self::PickUp => f.write_str(PICK_UP),
            Self::Drop => f.write_str(DROP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("IDLE", Command::Idle)]
    #[case("FORWARD", Command::Forward)]
    #[case("PICK UP", Command::PickUp)]
    #[case("DROP", Command::Drop)]
    #[case("GO 0 1", Command::Go { from: 0, to: 1 })]
    #[case("GO  12   4", Command::Go { from: 12, to: 4 })]
    fn parses_wire_commands(#[case] raw: &str, #[case] expected: Command) {
        assert_eq!(raw.parse::<Command>(), Ok(expected));
    }

    #[rstest]
    #[case("idle")]
    #[case("PICKUP")]
    #[case("")]
    #[case("WAIT")]
    fn rejects_unknown_commands(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Command>(),
            Err(CommandParseError::Unrecognised(raw.to_owned()))
        );
    }

    #[rstest]
    #[case("GO")]
    #[case("GO 1")]
    #[case("GO 1 2 3")]
    fn rejects_go_with_wrong_arity(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<Command>(),
            Err(CommandParseError::GoArity(_))
        ));
    }

    #[rstest]
    #[case("GO -1 2", "-1")]
    #[case("GO 1 x", "x")]
    fn rejects_go_with_bad_nodes(#[case] raw: &str, #[case] token: &str) {
        assert_eq!(
            raw.parse::<Command>(),
            Err(CommandParseError::InvalidNode(token.to_owned()))
        );
    }

    #[rstest]
    #[case(Command::Idle)]
    #[case(Command::Go { from: 4, to: 9 })]
    #[case(Command::PickUp)]
    fn display_matches_wire_form(#[case] command: Command) {
        assert_eq!(command.to_string().parse::<Command>(), Ok(command));
    }
}
