use std::fmt;

use super::error::InvalidGraphError;

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 10;

/// Dense node index, `0..node_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Node {}", self.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub label: String,
	pub x: f64,
	pub y: f64,
}

impl Node {
	pub fn new(id: usize, x: f64, y: f64) -> Self {
		Self {
			id: NodeId(id),
			label: format!("Node {}", id),
			x,
			y,
		}
	}
}

/// Directed, weighted connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: NodeId,
	pub target: NodeId,
	pub weight: u8,
}

/// An immutable directed graph. Every edge endpoint is a valid node index.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	// Successors per node, in edge-list order.
	adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
	/// Builds a graph from raw parts, checking ids, endpoints and weights.
	pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, InvalidGraphError> {
		if nodes.is_empty() {
			return Err(InvalidGraphError::Empty);
		}
		for (position, node) in nodes.iter().enumerate() {
			if node.id.0 != position {
				return Err(InvalidGraphError::NodeIdMismatch {
					position,
					found: node.id,
				});
			}
		}
		for (index, edge) in edges.iter().enumerate() {
			for node in [edge.source, edge.target] {
				if node.0 >= nodes.len() {
					return Err(InvalidGraphError::DanglingEdge { index, node });
				}
			}
			if edge.source == edge.target {
				return Err(InvalidGraphError::SelfLoop {
					index,
					node: edge.source,
				});
			}
			if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight) {
				return Err(InvalidGraphError::WeightOutOfRange {
					index,
					weight: edge.weight,
				});
			}
		}
		let mut adjacency = vec![Vec::new(); nodes.len()];
		for edge in &edges {
			adjacency[edge.source.0].push(edge.target);
		}
		Ok(Self {
			nodes,
			edges,
			adjacency,
		})
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(id.0)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn contains(&self, id: NodeId) -> bool {
		id.0 < self.nodes.len()
	}

	/// Targets of the outgoing edges of `id`, duplicates included.
	pub fn successors(&self, id: NodeId) -> &[NodeId] {
		self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn nodes(n: usize) -> Vec<Node> {
		(0..n).map(|i| Node::new(i, 0.0, 0.0)).collect()
	}

	fn edge(source: usize, target: usize) -> Edge {
		Edge {
			source: NodeId(source),
			target: NodeId(target),
			weight: 1,
		}
	}

	#[test]
	fn successors_keep_edge_order_and_duplicates() {
		let graph =
			Graph::from_parts(nodes(4), vec![edge(0, 3), edge(0, 1), edge(2, 0), edge(0, 3)])
				.unwrap();
		assert_eq!(graph.successors(NodeId(0)), &[NodeId(3), NodeId(1), NodeId(3)]);
		assert!(graph.successors(NodeId(1)).is_empty());
		assert!(graph.successors(NodeId(9)).is_empty());
	}

	#[test]
	fn labels_follow_ids() {
		assert_eq!(Node::new(7, 1.0, 2.0).label, "Node 7");
		assert_eq!(NodeId(7).to_string(), "Node 7");
	}

	#[test]
	fn rejects_malformed_parts() {
		assert_eq!(Graph::from_parts(vec![], vec![]), Err(InvalidGraphError::Empty));

		let mut shuffled = nodes(2);
		shuffled.swap(0, 1);
		assert_eq!(
			Graph::from_parts(shuffled, vec![]),
			Err(InvalidGraphError::NodeIdMismatch {
				position: 0,
				found: NodeId(1)
			})
		);

		assert_eq!(
			Graph::from_parts(nodes(2), vec![edge(0, 1), edge(1, 2)]),
			Err(InvalidGraphError::DanglingEdge {
				index: 1,
				node: NodeId(2)
			})
		);

		assert_eq!(
			Graph::from_parts(nodes(2), vec![edge(1, 1)]),
			Err(InvalidGraphError::SelfLoop {
				index: 0,
				node: NodeId(1)
			})
		);

		let heavy = Edge {
			weight: 11,
			..edge(0, 1)
		};
		assert_eq!(
			Graph::from_parts(nodes(2), vec![heavy]),
			Err(InvalidGraphError::WeightOutOfRange {
				index: 0,
				weight: 11
			})
		);
	}
}
