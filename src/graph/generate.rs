use log::info;
use rand::Rng;

use super::error::{GraphError, PreconditionError};
use super::types::{Edge, Graph, MAX_WEIGHT, MIN_WEIGHT, Node, NodeId};

const MAX_EDGES_PER_NODE: usize = 3;

/// Display rectangle the node coordinates are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
	pub width: f64,
	pub height: f64,
	/// Minimum distance between a node center and the canvas border.
	pub margin: f64,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 400.0,
			margin: 50.0,
		}
	}
}

impl Layout {
	fn x_range(&self) -> (f64, f64) {
		band(self.width, self.margin)
	}

	fn y_range(&self) -> (f64, f64) {
		band(self.height, self.margin)
	}
}

fn band(extent: f64, margin: f64) -> (f64, f64) {
	let lo = margin.min(extent / 2.0).max(0.0);
	let hi = (extent - margin).max(lo);
	(lo, hi)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Generate a random directed graph of `node_count` nodes.
///
/// Every node rolls one to three outgoing edges with uniformly chosen targets.
/// Rolls that land on the node itself are dropped, so the realized out-degree
/// can be lower than the roll. Weights are uniform in `1..=10`.
pub fn generate<R: Rng + ?Sized>(
	node_count: usize,
	layout: &Layout,
	rng: &mut R,
) -> Result<Graph, GraphError> {
	if node_count == 0 {
		return Err(PreconditionError::NodeCount.into());
	}

	let (xs, ys) = (layout.x_range(), layout.y_range());
	let nodes: Vec<Node> = (0..node_count)
		.map(|i| {
			let x = sample(rng, xs);
			let y = sample(rng, ys);
			Node::new(i, x, y)
		})
		.collect();

	let mut edges = Vec::with_capacity(node_count * 2);
	for source in 0..node_count {
		let rolls = rng.gen_range(1..=MAX_EDGES_PER_NODE);
		for _ in 0..rolls {
			let target = rng.gen_range(0..node_count);
			let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
			if target != source {
				edges.push(Edge {
					source: NodeId(source),
					target: NodeId(target),
					weight,
				});
			}
		}
	}

	info!("Generated graph with {} nodes and {} edges", nodes.len(), edges.len());
	Ok(Graph::from_parts(nodes, edges)?)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn generated_graphs_are_well_formed() {
		let layout = Layout::default();
		for seed in 0..200 {
			let mut rng = StdRng::seed_from_u64(seed);
			let n = 1 + (seed as usize % 15);
			let graph = generate(n, &layout, &mut rng).unwrap();

			let ids: Vec<usize> = graph.nodes().iter().map(|n| n.id.index()).collect();
			assert_eq!(ids, (0..n).collect::<Vec<_>>());

			for node in graph.nodes() {
				assert!((50.0..750.0).contains(&node.x), "x = {}", node.x);
				assert!((50.0..350.0).contains(&node.y), "y = {}", node.y);
				assert!(graph.successors(node.id).len() <= MAX_EDGES_PER_NODE);
			}

			for edge in graph.edges() {
				assert!(graph.contains(edge.source) && graph.contains(edge.target));
				assert_ne!(edge.source, edge.target);
				assert!((1..=10).contains(&edge.weight));
			}
		}
	}

	#[test]
	fn self_targets_are_dropped_not_rerolled() {
		// With two nodes a roll either hits the other node or is dropped, so
		// over many seeds both outcomes must show up.
		let mut saw_empty = false;
		let mut saw_edge = false;
		for seed in 0..100 {
			let graph = generate(2, &Layout::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
			let out = graph.successors(NodeId(0)).len();
			saw_empty |= out == 0;
			saw_edge |= out > 0;
		}
		assert!(saw_empty && saw_edge);
	}

	#[test]
	fn same_seed_same_graph() {
		let layout = Layout::default();
		let a = generate(10, &layout, &mut StdRng::seed_from_u64(42)).unwrap();
		let b = generate(10, &layout, &mut StdRng::seed_from_u64(42)).unwrap();
		assert_eq!(a, b);
	}

	#[test]
	fn single_node_has_no_edges() {
		let graph = generate(1, &Layout::default(), &mut StdRng::seed_from_u64(7)).unwrap();
		assert_eq!(graph.len(), 1);
		assert!(graph.edges().is_empty());
	}

	#[test]
	fn zero_nodes_is_rejected() {
		let result = generate(0, &Layout::default(), &mut StdRng::seed_from_u64(7));
		assert_eq!(result, Err(GraphError::Precondition(PreconditionError::NodeCount)));
	}

	#[test]
	fn degenerate_layout_pins_coordinates() {
		let layout = Layout {
			width: 80.0,
			height: 60.0,
			margin: 50.0,
		};
		let graph = generate(5, &layout, &mut StdRng::seed_from_u64(3)).unwrap();
		for node in graph.nodes() {
			assert_eq!((node.x, node.y), (40.0, 30.0));
		}
	}
}
