//! Static problem description.
//!
//! A [`Problem`] bundles the transport graph, the vehicle start nodes and the
//! task list. It is created once from external input and never mutated; the
//! graph is held behind an [`Arc`] so every simulation snapshot can share it.

use std::sync::Arc;

use crate::graph::{Graph, NodeId};
use crate::task::{Task, TaskIndex, VehiclePosition};

/// Read-only description of one routing instance.
///
/// Task order is input order and defines the pickup tie-break; callers that
/// need release order must sort explicitly (see [`Problem::tasks_by_release`]).
///
/// # Examples
///
/// ```
/// use courier_core::{Graph, Problem, Task};
///
/// let graph = Graph::from_edges([(0, 1, 3)]);
/// let problem = Problem::new(graph, vec![0], vec![Task::new(0, 0, 1)]);
/// assert_eq!(problem.vehicle_count(), 1);
/// assert_eq!(problem.task_count(), 1);
/// assert_eq!(problem.graph().weight(1, 0), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    graph: Arc<Graph>,
    vehicle_starts: Vec<NodeId>,
    tasks: Vec<Task>,
    declared_nodes: Option<usize>,
}

impl Problem {
    /// Construct a problem from its parts.
    #[must_use]
    pub fn new(graph: Graph, vehicle_starts: Vec<NodeId>, tasks: Vec<Task>) -> Self {
        Self {
            graph: Arc::new(graph),
            vehicle_starts,
            tasks,
            declared_nodes: None,
        }
    }

    /// Record the node count declared by the source, which may exceed the
    /// number of nodes touched by edges.
    #[must_use]
    pub fn with_declared_nodes(mut self, nodes: usize) -> Self {
        self.declared_nodes = Some(nodes);
        self
    }

    /// The transport graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A shared handle to the transport graph.
    #[must_use]
    pub fn shared_graph(&self) -> Arc<Graph> {
        Arc::clone(&self.graph)
    }

    /// Start node of each vehicle, indexed by vehicle id.
    #[must_use]
    pub fn vehicle_starts(&self) -> &[NodeId] {
        &self.vehicle_starts
    }

    /// Start positions of every vehicle, all at rest.
    #[must_use]
    pub fn vehicle_positions(&self) -> Vec<VehiclePosition> {
        self.vehicle_starts
            .iter()
            .copied()
            .map(VehiclePosition::at_rest)
            .collect()
    }

    /// Tasks in input order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks with their indices, sorted by release time. Ties keep input order.
    #[must_use]
    pub fn tasks_by_release(&self) -> Vec<(TaskIndex, &Task)> {
        let mut ordered: Vec<_> = self.tasks.iter().enumerate().collect();
        ordered.sort_by_key(|(_, task)| task.release_time);
        ordered
    }

    /// Number of vehicles.
    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_starts.len()
    }

    /// Number of tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Declared node count, falling back to the nodes present in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.declared_nodes
            .unwrap_or_else(|| self.graph.node_count())
            .max(self.graph.node_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn problem() -> Problem {
        let graph = Graph::from_edges([(0, 1, 2), (1, 2, 2)]);
        Problem::new(
            graph,
            vec![0, 2],
            vec![Task::new(7, 0, 1), Task::new(2, 1, 2), Task::new(7, 2, 0)],
        )
    }

    #[rstest]
    fn vehicles_start_at_rest(problem: Problem) {
        let positions = problem.vehicle_positions();
        assert_eq!(
            positions,
            vec![VehiclePosition::at_rest(0), VehiclePosition::at_rest(2)]
        );
    }

    #[rstest]
    fn release_order_is_stable(problem: Problem) {
        let order: Vec<TaskIndex> = problem
            .tasks_by_release()
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[rstest]
    fn declared_nodes_never_undercount(problem: Problem) {
        assert_eq!(problem.node_count(), 3);
        assert_eq!(problem.clone().with_declared_nodes(10).node_count(), 10);
        assert_eq!(problem.with_declared_nodes(1).node_count(), 3);
    }
}
