//! Graph data model, random generation and the stepped breadth-first traversal.

mod error;
mod generate;
mod traversal;
mod types;

pub use error::{GraphError, PreconditionError};
pub use generate::{Layout, generate};
pub use traversal::{Finish, Step, Traversal, run};
pub use types::{Graph, Node, NodeId};

/// Graph on `n` unplaced nodes with weight-1 edges for the given pairs.
#[cfg(test)]
pub(crate) fn from_pairs(n: usize, pairs: &[(usize, usize)]) -> Graph {
	let nodes = (0..n).map(|i| Node::new(i, 0.0, 0.0)).collect();
	let edges = pairs
		.iter()
		.map(|&(s, t)| types::Edge {
			source: NodeId(s),
			target: NodeId(t),
			weight: 1,
		})
		.collect();
	Graph::from_parts(nodes, edges).unwrap()
}
