//! All UI-facing state for one page visit, with explicit transitions.

use log::{info, warn};
use rand::Rng;

use crate::algorithm::Algorithm;
use crate::config::PlatformConfig;
use crate::graph::{
	Finish, Graph, GraphError, NodeId, PreconditionError, Step, Traversal, generate, run,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	pub source: Option<NodeId>,
	pub dest: Option<NodeId>,
}

/// Identifies one run. Ticks carrying an older token are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken(pub(crate) u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunStatus {
	#[default]
	Idle,
	Running,
	Finished {
		reached_destination: bool,
	},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressPoint {
	pub step: usize,
	pub visited: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
	/// The token belongs to a cancelled or superseded run.
	Stale,
	Skipped(NodeId),
	Visited(NodeId),
	Finished(Finish),
}

impl TickOutcome {
	/// Whether the driver should keep scheduling ticks for this run.
	pub fn is_live(self) -> bool {
		matches!(self, TickOutcome::Skipped(_) | TickOutcome::Visited(_))
	}
}

#[derive(Clone, Debug)]
pub struct Session {
	config: PlatformConfig,
	graph: Graph,
	algorithm: Algorithm,
	selection: Selection,
	traversal: Option<Traversal>,
	status: RunStatus,
	history: Vec<ProgressPoint>,
	error: Option<GraphError>,
	generation: u64,
}

impl Session {
	pub fn new(config: PlatformConfig, graph: Graph) -> Self {
		Self {
			algorithm: config.algorithm,
			config,
			graph,
			selection: Selection::default(),
			traversal: None,
			status: RunStatus::Idle,
			history: Vec::new(),
			error: None,
			generation: 0,
		}
	}

	/// Start a session on a freshly generated graph.
	pub fn generate<R: Rng + ?Sized>(
		config: PlatformConfig,
		rng: &mut R,
	) -> Result<Self, GraphError> {
		let graph = generate(config.node_count, &config.layout, rng)?;
		Ok(Self::new(config, graph))
	}

	pub fn config(&self) -> &PlatformConfig {
		&self.config
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	pub fn selection(&self) -> Selection {
		self.selection
	}

	pub fn status(&self) -> RunStatus {
		self.status
	}

	pub fn is_running(&self) -> bool {
		self.status == RunStatus::Running
	}

	pub fn error(&self) -> Option<&GraphError> {
		self.error.as_ref()
	}

	pub fn history(&self) -> &[ProgressPoint] {
		&self.history
	}

	pub fn visited(&self) -> &[NodeId] {
		self.traversal.as_ref().map(Traversal::visited).unwrap_or(&[])
	}

	pub fn is_visited(&self, id: NodeId) -> bool {
		self.traversal.as_ref().is_some_and(|t| t.is_visited(id))
	}

	pub fn step_count(&self) -> usize {
		self.traversal.as_ref().map_or(0, Traversal::step_count)
	}

	/// Most recently visited node of the current run.
	pub fn current(&self) -> Option<NodeId> {
		self.visited().last().copied()
	}

	pub fn can_run(&self) -> bool {
		!self.is_running()
			&& self.selection.source.is_some()
			&& self.selection.dest.is_some()
			&& self.algorithm.is_runnable()
	}

	/// First pick sets the source, a later distinct pick sets the destination.
	/// Anything else, including picks during a run, is ignored.
	pub fn select(&mut self, id: NodeId) -> Result<Selection, PreconditionError> {
		if !self.graph.contains(id) {
			return Err(self.fail(PreconditionError::UnknownNode(id)));
		}
		if self.is_running() {
			return Ok(self.selection);
		}
		match self.selection {
			Selection { source: None, .. } => self.selection.source = Some(id),
			Selection {
				source: Some(source),
				dest: None,
			} if source != id => self.selection.dest = Some(id),
			_ => {}
		}
		Ok(self.selection)
	}

	pub fn set_algorithm(&mut self, algorithm: Algorithm) {
		self.algorithm = algorithm;
	}

	/// Begin a new run, cancelling whatever run was in flight.
	pub fn start_run(&mut self) -> Result<RunToken, PreconditionError> {
		let (Some(source), Some(dest)) = (self.selection.source, self.selection.dest) else {
			return Err(self.fail(PreconditionError::MissingSelection));
		};
		if source == dest {
			return Err(self.fail(PreconditionError::SameEndpoints));
		}
		if !self.algorithm.is_runnable() {
			return Err(self.fail(PreconditionError::UnsupportedAlgorithm(self.algorithm.name())));
		}
		let traversal = match Traversal::new(&self.graph, source, dest) {
			Ok(traversal) => traversal,
			Err(err) => return Err(self.fail(err)),
		};

		self.generation += 1;
		self.traversal = Some(traversal);
		self.status = RunStatus::Running;
		self.history = vec![ProgressPoint {
			step: 0,
			visited: 0,
		}];
		self.error = None;
		info!(
			"Starting {} from {} to {} (run {})",
			self.algorithm, source, dest, self.generation
		);
		Ok(RunToken(self.generation))
	}

	/// Advance the run identified by `token` by one tick.
	pub fn tick(&mut self, token: RunToken) -> TickOutcome {
		if token.0 != self.generation || !self.is_running() {
			warn!("Ignoring tick for inactive run {}", token.0);
			return TickOutcome::Stale;
		}
		let Some(traversal) = self.traversal.as_mut() else {
			return TickOutcome::Stale;
		};

		match traversal.step(&self.graph) {
			Step::Visited(node) => {
				self.history.push(ProgressPoint {
					step: traversal.step_count(),
					visited: traversal.visited().len(),
				});
				TickOutcome::Visited(node)
			}
			Step::Skipped(node) => TickOutcome::Skipped(node),
			Step::Finished(finish) => {
				self.status = RunStatus::Finished {
					reached_destination: finish.reached_destination,
				};
				info!(
					"Run {} finished after {} steps, destination reached: {}",
					self.generation, finish.steps, finish.reached_destination
				);
				TickOutcome::Finished(finish)
			}
		}
	}

	/// Complete the current run at once, replaying it from the source so the
	/// progress history is identical to a ticked run.
	pub fn finish_now(&mut self) -> TickOutcome {
		let Some(current) = self.traversal.as_ref().filter(|_| self.is_running()) else {
			return TickOutcome::Stale;
		};
		let mut history = vec![ProgressPoint {
			step: 0,
			visited: 0,
		}];
		let replay = run(&self.graph, current.source(), current.dest(), |order, steps| {
			history.push(ProgressPoint {
				step: steps,
				visited: order.len(),
			})
		});
		let traversal = match replay {
			Ok(traversal) => traversal,
			Err(err) => {
				self.fail(err);
				return TickOutcome::Stale;
			}
		};

		let finish = traversal.outcome();
		self.generation += 1;
		self.traversal = Some(traversal);
		self.history = history;
		self.status = RunStatus::Finished {
			reached_destination: finish.reached_destination,
		};
		info!("Run skipped to its end after {} steps", finish.steps);
		TickOutcome::Finished(finish)
	}

	/// Clear selection and progress. Outstanding run tokens become stale.
	pub fn reset(&mut self) {
		self.generation += 1;
		self.selection = Selection::default();
		self.traversal = None;
		self.status = RunStatus::Idle;
		self.history.clear();
		self.error = None;
	}

	/// Replace the graph with a new random one of the configured size.
	pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GraphError> {
		match generate(self.config.node_count, &self.config.layout, rng) {
			Ok(graph) => {
				self.graph = graph;
				self.reset();
				Ok(())
			}
			Err(err) => Err(self.fail(err)),
		}
	}

	pub fn dismiss_error(&mut self) {
		self.error = None;
	}

	fn fail<E>(&mut self, err: E) -> E
	where
		E: Clone + Into<GraphError>,
	{
		let stored = err.clone().into();
		warn!("{}", stored);
		self.error = Some(stored);
		err
	}
}
