use thiserror::Error;

use super::types::NodeId;

/// Caller mistakes that are reported to the user as a short message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
	#[error("Node count must be at least 1")]
	NodeCount,

	#[error("Invalid value {value:?} for parameter `{key}`")]
	InvalidParameter { key: &'static str, value: String },

	#[error("{0} does not exist in this graph")]
	UnknownNode(NodeId),

	#[error("Please select both source and destination nodes.")]
	MissingSelection,

	#[error("Source and destination must be different nodes.")]
	SameEndpoints,

	#[error("{0} is not available yet")]
	UnsupportedAlgorithm(&'static str),
}

/// Structural problems in graph data handed to [`Graph::from_parts`](super::Graph::from_parts).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
	#[error("graph has no nodes")]
	Empty,

	#[error("node at position {position} has id {found}")]
	NodeIdMismatch { position: usize, found: NodeId },

	#[error("edge {index} references missing node {node}")]
	DanglingEdge { index: usize, node: NodeId },

	#[error("edge {index} is a self-loop on {node}")]
	SelfLoop { index: usize, node: NodeId },

	#[error("edge {index} has weight {weight}, expected 1..=10")]
	WeightOutOfRange { index: usize, weight: u8 },
}

/// Anything that can stop a graph from being built or shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	#[error(transparent)]
	Precondition(#[from] PreconditionError),

	#[error("Invalid graph data: {0}")]
	InvalidGraph(#[from] InvalidGraphError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wrapped_messages() {
		let precondition: GraphError = PreconditionError::MissingSelection.into();
		assert_eq!(
			precondition.to_string(),
			"Please select both source and destination nodes."
		);
		let invalid: GraphError = InvalidGraphError::Empty.into();
		assert_eq!(invalid.to_string(), "Invalid graph data: graph has no nodes");
	}
}
