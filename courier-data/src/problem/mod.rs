//! Line-oriented problem text format.
//!
//! ```text
//! <nodes> <edges> <tasks> <vehicles>
//! <start node of vehicle 1> ... <start node of vehicle N>
//! <from> <to> <weight>            (one line per edge)
//! <release> <start> <end>         (one line per task)
//! ```
//!
//! Lines are positional: the second line always holds the vehicle starts,
//! even when it is blank because there are no vehicles. Lines past the
//! declared edges and tasks are ignored.

mod error;

use std::fmt;
use std::io::{self, Read, Write};

use camino::Utf8Path;
use courier_core::{Graph, NodeId, Problem, Task};
use courier_fs::{create_utf8_file, ensure_parent_dir, open_utf8_file};
use log::debug;

pub use error::{ProblemParseError, ReadProblemError, WriteProblemError};

const HEADER_FIELDS: &str = "the header";
const EDGE_FIELDS: &str = "an edge";
const TASK_FIELDS: &str = "a task";
const VEHICLE_STARTS: &str = "vehicle start nodes";

/// Parse a problem from its text form.
///
/// Duplicate edges keep the smaller weight and task order is preserved.
///
/// # Errors
/// Returns [`ProblemParseError`] when a line is missing, holds the wrong
/// number of fields, contains a non-integer token or declares a zero weight.
///
/// # Examples
///
/// ```
/// use courier_data::parse_problem;
///
/// let problem = parse_problem("2 1 1 1\n0\n0 1 3\n0 0 1\n").unwrap();
/// assert_eq!(problem.vehicle_count(), 1);
/// assert_eq!(problem.graph().weight(1, 0), Some(3));
/// ```
pub fn parse_problem(text: &str) -> Result<Problem, ProblemParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let header = lines
        .first()
        .filter(|line| !line.trim().is_empty())
        .ok_or(ProblemParseError::MissingHeader)?;
    let [nodes, edges, tasks, vehicles] = parse_exact::<4>(header, 1, HEADER_FIELDS)?;
    let nodes: usize = narrow(nodes, 1)?;
    let edges: usize = narrow(edges, 1)?;
    let tasks: usize = narrow(tasks, 1)?;
    let vehicles: usize = narrow(vehicles, 1)?;

    let vehicle_line = match lines.get(1).copied() {
        Some(line) => line,
        None if vehicles == 0 => "",
        None => {
            return Err(ProblemParseError::MissingLine {
                line: 2,
                what: VEHICLE_STARTS,
            });
        }
    };
    let starts = parse_integers(vehicle_line, 2)?;
    if starts.len() != vehicles {
        return Err(ProblemParseError::FieldCount {
            line: 2,
            what: VEHICLE_STARTS,
            expected: vehicles,
            found: starts.len(),
        });
    }
    let vehicle_starts = starts
        .into_iter()
        .map(|start| narrow::<NodeId>(start, 2))
        .collect::<Result<Vec<_>, _>>()?;

    let mut graph = Graph::new();
    let edge_start = 2;
    for offset in 0..edges {
        let number = edge_start + offset + 1;
        let line = required_line(&lines, number, EDGE_FIELDS)?;
        let [from, to, weight] = parse_exact::<3>(line, number, EDGE_FIELDS)?;
        let from: NodeId = narrow(from, number)?;
        let to: NodeId = narrow(to, number)?;
        if weight == 0 {
            return Err(ProblemParseError::ZeroWeight {
                line: number,
                from,
                to,
            });
        }
        if from == to {
            return Err(ProblemParseError::SelfLoop {
                line: number,
                node: from,
            });
        }
        graph.insert_edge(from, to, narrow(weight, number)?);
    }

    let task_start = edge_start + edges;
    let mut task_list = Vec::with_capacity(tasks);
    for offset in 0..tasks {
        let number = task_start + offset + 1;
        let line = required_line(&lines, number, TASK_FIELDS)?;
        let [release, start, end] = parse_exact::<3>(line, number, TASK_FIELDS)?;
        task_list.push(Task::new(
            release,
            narrow(start, number)?,
            narrow(end, number)?,
        ));
    }

    let trailing = lines
        .iter()
        .skip(task_start + tasks)
        .filter(|line| !line.trim().is_empty())
        .count();
    if trailing > 0 {
        debug!("ignoring {trailing} trailing non-blank lines after the declared tasks");
    }

    Ok(Problem::new(graph, vehicle_starts, task_list).with_declared_nodes(nodes))
}

/// Read and parse a problem file.
///
/// # Errors
/// Returns [`ReadProblemError::Io`] when the file cannot be read and
/// [`ReadProblemError::Parse`] when its contents are malformed.
pub fn read_problem(path: &Utf8Path) -> Result<Problem, ReadProblemError> {
    let mut text = String::new();
    open_utf8_file(path)
        .and_then(|mut file| file.read_to_string(&mut text))
        .map_err(|source| ReadProblemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_problem(&text).map_err(|source| ReadProblemError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a problem in its text form.
#[must_use]
pub fn render_problem(problem: &Problem) -> String {
    ProblemText(problem).to_string()
}

/// Write a problem in its text form to `writer`.
///
/// # Errors
/// Propagates IO failures from `writer`.
pub fn write_problem<W: Write>(problem: &Problem, writer: &mut W) -> io::Result<()> {
    write!(writer, "{}", ProblemText(problem))
}

/// Write a problem to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns [`WriteProblemError`] when the file cannot be created or written.
pub fn save_problem(problem: &Problem, path: &Utf8Path) -> Result<(), WriteProblemError> {
    ensure_parent_dir(path)
        .and_then(|()| create_utf8_file(path))
        .and_then(|mut file| {
            write_problem(problem, &mut file)?;
            file.flush()
        })
        .map_err(|source| WriteProblemError {
            path: path.to_path_buf(),
            source,
        })
}

struct ProblemText<'a>(&'a Problem);

impl fmt::Display for ProblemText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let problem = self.0;
        let graph = problem.graph();
        writeln!(
            f,
            "{} {} {} {}",
            problem.node_count(),
            graph.edge_count(),
            problem.task_count(),
            problem.vehicle_count()
        )?;
        let starts: Vec<String> = problem
            .vehicle_starts()
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(f, "{}", starts.join(" "))?;
        for (from, to, weight) in graph.edges() {
            writeln!(f, "{from} {to} {weight}")?;
        }
        for task in problem.tasks() {
            writeln!(
                f,
                "{} {} {}",
                task.release_time, task.start_node, task.end_node
            )?;
        }
        Ok(())
    }
}

fn required_line<'a>(
    lines: &[&'a str],
    number: usize,
    what: &'static str,
) -> Result<&'a str, ProblemParseError> {
    lines
        .get(number - 1)
        .copied()
        .ok_or(ProblemParseError::MissingLine { line: number, what })
}

fn parse_integers(line: &str, number: usize) -> Result<Vec<u64>, ProblemParseError> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<u64>()
                .map_err(|_| ProblemParseError::InvalidInteger {
                    line: number,
                    token: token.to_owned(),
                })
        })
        .collect()
}

fn parse_exact<const N: usize>(
    line: &str,
    number: usize,
    what: &'static str,
) -> Result<[u64; N], ProblemParseError> {
    let values = parse_integers(line, number)?;
    let found = values.len();
    <[u64; N]>::try_from(values).map_err(|_| ProblemParseError::FieldCount {
        line: number,
        what,
        expected: N,
        found,
    })
}

fn narrow<T: TryFrom<u64>>(value: u64, number: usize) -> Result<T, ProblemParseError> {
    T::try_from(value).map_err(|_| ProblemParseError::InvalidInteger {
        line: number,
        token: value.to_string(),
    })
}
