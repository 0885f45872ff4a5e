use std::collections::VecDeque;

use log::{debug, trace, warn};

use super::error::PreconditionError;
use super::types::{Graph, NodeId};

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
	/// A new node was reached and its successors were queued.
	Visited(NodeId),
	/// The dequeued node had already been visited; the tick did nothing else.
	Skipped(NodeId),
	Finished(Finish),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finish {
	pub reached_destination: bool,
	pub steps: usize,
}

/// Breadth-first search advanced one dequeue per call to [`Traversal::step`].
///
/// The frontier is filtered lazily: successors are queued even when already
/// visited or already queued, and discarded when they are dequeued.
#[derive(Clone, Debug)]
pub struct Traversal {
	source: NodeId,
	dest: NodeId,
	frontier: VecDeque<NodeId>,
	seen: Vec<bool>,
	visited: Vec<NodeId>,
	finished: bool,
}

impl Traversal {
	pub fn new(graph: &Graph, source: NodeId, dest: NodeId) -> Result<Self, PreconditionError> {
		for id in [source, dest] {
			if !graph.contains(id) {
				return Err(PreconditionError::UnknownNode(id));
			}
		}
		Ok(Self {
			source,
			dest,
			frontier: VecDeque::from([source]),
			seen: vec![false; graph.len()],
			visited: Vec::new(),
			finished: false,
		})
	}

	pub fn source(&self) -> NodeId {
		self.source
	}

	pub fn dest(&self) -> NodeId {
		self.dest
	}

	/// Nodes in discovery order.
	pub fn visited(&self) -> &[NodeId] {
		&self.visited
	}

	pub fn step_count(&self) -> usize {
		self.visited.len()
	}

	pub fn is_visited(&self, id: NodeId) -> bool {
		self.seen.get(id.index()).copied().unwrap_or(false)
	}

	pub fn reached_destination(&self) -> bool {
		self.is_visited(self.dest)
	}

	pub fn outcome(&self) -> Finish {
		Finish {
			reached_destination: self.reached_destination(),
			steps: self.step_count(),
		}
	}

	/// Advance by one tick. `graph` should be the graph the traversal was
	/// created for; successors outside the original node range end the run.
	pub fn step(&mut self, graph: &Graph) -> Step {
		if self.finished || self.reached_destination() {
			self.finished = true;
			return Step::Finished(self.outcome());
		}
		let Some(node) = self.frontier.pop_front() else {
			self.finished = true;
			return Step::Finished(self.outcome());
		};
		let Some(seen) = self.seen.get_mut(node.index()) else {
			warn!("{} is outside the traversed graph, stopping", node);
			self.finished = true;
			return Step::Finished(self.outcome());
		};
		if *seen {
			trace!("{} already visited, skipping", node);
			return Step::Skipped(node);
		}

		*seen = true;
		self.visited.push(node);
		self.frontier.extend(graph.successors(node).iter().copied());
		debug!(
			"Step {}: visited {} (frontier {})",
			self.visited.len(),
			node,
			self.frontier.len()
		);
		Step::Visited(node)
	}
}

/// Run a traversal to completion, calling `on_step` with the visited order and
/// step count after each newly visited node. The finished traversal is
/// returned; [`Traversal::outcome`] summarizes it.
pub fn run<F>(
	graph: &Graph,
	source: NodeId,
	dest: NodeId,
	mut on_step: F,
) -> Result<Traversal, PreconditionError>
where
	F: FnMut(&[NodeId], usize),
{
	let mut traversal = Traversal::new(graph, source, dest)?;
	loop {
		match traversal.step(graph) {
			Step::Visited(_) => on_step(traversal.visited(), traversal.step_count()),
			Step::Skipped(_) => {}
			Step::Finished(_) => return Ok(traversal),
		}
	}
}
