//! Seeded random problem generator.
//!
//! Instances are reproducible: the same [`GeneratorConfig`] (seed included)
//! always yields the same [`Problem`].

use std::collections::VecDeque;

use camino::{Utf8Path, Utf8PathBuf};
use courier_core::{Graph, NodeId, Problem, Task, Time, Weight};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::problem::{WriteProblemError, save_problem};

/// Largest fleet drawn by default.
pub const MAX_VEHICLE_COUNT: usize = 30;
/// Largest task list drawn by default.
pub const MAX_TASK_COUNT: usize = 150;
/// Largest edge weight drawn by default.
pub const MAX_WEIGHT: Weight = 25;
/// Latest release time drawn by default.
pub const MAX_RELEASE_TIME: Time = 100;

/// Parameters for [`generate_problem`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of nodes, labelled `0..nodes`.
    pub nodes: NodeId,
    /// Probability that any pair of nodes is joined before bridging.
    pub edge_probability: f64,
    /// Upper bound for the per-instance weight ceiling.
    pub max_weight: Weight,
    /// Smallest fleet, clamped to half the node count.
    pub min_vehicles: usize,
    /// Largest fleet, clamped to half the node count.
    pub max_vehicles: usize,
    /// Smallest task list, clamped to half the node count.
    pub min_tasks: usize,
    /// Largest task list, clamped to half the node count.
    pub max_tasks: usize,
    /// Release times are drawn from `1..=max_release_time`.
    pub max_release_time: Time,
    /// Seed for the ChaCha8 stream.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 60,
            edge_probability: 0.05,
            max_weight: MAX_WEIGHT,
            min_vehicles: 5,
            max_vehicles: MAX_VEHICLE_COUNT,
            min_tasks: 5,
            max_tasks: MAX_TASK_COUNT,
            max_release_time: MAX_RELEASE_TIME,
            seed: 0,
        }
    }
}

/// Errors raised by the generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Tasks need two distinct nodes.
    #[error("at least 2 nodes are required, got {nodes}")]
    TooFewNodes {
        /// Requested node count.
        nodes: NodeId,
    },
    /// The edge probability was outside `0..=1`.
    #[error("edge probability {probability} is outside 0..=1")]
    InvalidProbability {
        /// Requested probability.
        probability: f64,
    },
    /// The weight ceiling was zero.
    #[error("maximum edge weight must be positive")]
    ZeroMaxWeight,
    /// The release ceiling was zero.
    #[error("maximum release time must be positive")]
    ZeroMaxReleaseTime,
    /// Writing a generated instance failed.
    #[error(transparent)]
    Write(#[from] WriteProblemError),
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), GenerateError> {
        if self.nodes < 2 {
            return Err(GenerateError::TooFewNodes { nodes: self.nodes });
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GenerateError::InvalidProbability {
                probability: self.edge_probability,
            });
        }
        if self.max_weight == 0 {
            return Err(GenerateError::ZeroMaxWeight);
        }
        if self.max_release_time == 0 {
            return Err(GenerateError::ZeroMaxReleaseTime);
        }
        Ok(())
    }

    /// Inclusive count range for a quantity bounded by half the node count.
    fn count_range(&self, min: usize, max: usize) -> (usize, usize) {
        let upper = to_usize(self.nodes.div_euclid(2)).min(max);
        (min.min(upper), upper)
    }
}

/// Generate one connected random instance.
///
/// # Errors
/// Returns [`GenerateError`] when the configuration is unusable.
///
/// # Examples
///
/// ```
/// use courier_data::{GeneratorConfig, generate_problem};
///
/// let config = GeneratorConfig { nodes: 20, seed: 7, ..GeneratorConfig::default() };
/// let problem = generate_problem(&config).unwrap();
/// assert_eq!(problem.node_count(), 20);
/// assert_eq!(problem, generate_problem(&config).unwrap());
/// ```
pub fn generate_problem(config: &GeneratorConfig) -> Result<Problem, GenerateError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut pairs = random_pairs(&mut rng, config.nodes, config.edge_probability);
    bridge_components(&mut rng, config.nodes, &mut pairs);

    let weight_ceiling = rng.gen_range(1..=config.max_weight);
    let graph = Graph::from_edges(
        pairs
            .into_iter()
            .map(|(from, to)| (from, to, rng.gen_range(1..=weight_ceiling)))
            .collect::<Vec<_>>(),
    );

    let (min_vehicles, max_vehicles) = config.count_range(config.min_vehicles, config.max_vehicles);
    let vehicle_count = rng.gen_range(min_vehicles..=max_vehicles);
    let vehicle_starts = (0..vehicle_count)
        .map(|_| rng.gen_range(0..config.nodes))
        .collect();

    let tasks = random_tasks(&mut rng, config);
    debug!(
        "generated {} nodes, {} edges, {} vehicles, {} tasks from seed {}",
        config.nodes,
        graph.edge_count(),
        vehicle_count,
        tasks.len(),
        config.seed
    );
    Ok(Problem::new(graph, vehicle_starts, tasks).with_declared_nodes(to_usize(config.nodes)))
}

/// Generate `count` instances into `output_dir` as `input_<i>.txt`.
///
/// Instance `i` uses the configured seed plus `i`.
///
/// # Errors
/// Returns [`GenerateError`] when the configuration is unusable or a file
/// cannot be written.
pub fn generate_problem_set(
    config: &GeneratorConfig,
    count: usize,
    output_dir: &Utf8Path,
) -> Result<Vec<Utf8PathBuf>, GenerateError> {
    let mut written = Vec::with_capacity(count);
    for (index, seed_offset) in (0..count).zip(0_u64..) {
        let instance = GeneratorConfig {
            seed: config.seed.wrapping_add(seed_offset),
            ..config.clone()
        };
        let problem = generate_problem(&instance)?;
        let path = output_dir.join(format!("input_{index}.txt"));
        save_problem(&problem, &path)?;
        written.push(path);
    }
    info!("wrote {} problem instances to {output_dir}", written.len());
    Ok(written)
}

fn random_pairs(rng: &mut ChaCha8Rng, nodes: NodeId, probability: f64) -> Vec<(NodeId, NodeId)> {
    let mut pairs = Vec::new();
    for from in 0..nodes {
        for to in from + 1..nodes {
            if rng.gen_bool(probability) {
                pairs.push((from, to));
            }
        }
    }
    pairs
}

/// Join every connected component to the first one through a random pair
/// of member nodes.
fn bridge_components(rng: &mut ChaCha8Rng, nodes: NodeId, pairs: &mut Vec<(NodeId, NodeId)>) {
    let components = components(nodes, pairs);
    let Some((anchor, rest)) = components.split_first() else {
        return;
    };
    for component in rest {
        if let (Some(&from), Some(&to)) = (anchor.choose(rng), component.choose(rng)) {
            pairs.push((from, to));
        }
    }
}

fn components(nodes: NodeId, pairs: &[(NodeId, NodeId)]) -> Vec<Vec<NodeId>> {
    let size = to_usize(nodes);
    let mut adjacency = vec![Vec::new(); size];
    for &(from, to) in pairs {
        if let Some(list) = adjacency.get_mut(to_usize(from)) {
            list.push(to);
        }
        if let Some(list) = adjacency.get_mut(to_usize(to)) {
            list.push(from);
        }
    }

    let mut seen = vec![false; size];
    let mut components = Vec::new();
    for root in 0..nodes {
        if !mark(&mut seen, root) {
            continue;
        }
        let mut members = vec![root];
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            for &next in adjacency.get(to_usize(node)).into_iter().flatten() {
                if mark(&mut seen, next) {
                    members.push(next);
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }
    components
}

/// Mark `node` as seen, returning whether it was previously unseen.
fn mark(seen: &mut [bool], node: NodeId) -> bool {
    match seen.get_mut(to_usize(node)) {
        Some(flag) if !*flag => {
            *flag = true;
            true
        }
        _ => false,
    }
}

fn random_tasks(rng: &mut ChaCha8Rng, config: &GeneratorConfig) -> Vec<Task> {
    let (min_tasks, max_tasks) = config.count_range(config.min_tasks, config.max_tasks);
    let task_count = rng.gen_range(min_tasks..=max_tasks);

    // Starts are distinct: take a prefix of a shuffled node list.
    let mut order: Vec<NodeId> = (0..config.nodes).collect();
    order.shuffle(rng);

    let mut tasks: Vec<Task> = order
        .into_iter()
        .take(task_count)
        .map(|start| {
            let release = rng.gen_range(1..=config.max_release_time);
            let mut end = rng.gen_range(0..config.nodes);
            while end == start {
                end = rng.gen_range(0..config.nodes);
            }
            Task::new(release, start, end)
        })
        .collect();
    tasks.sort_by_key(|task| task.release_time);
    tasks
}

fn to_usize(value: NodeId) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
