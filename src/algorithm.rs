//! Catalog of the algorithms the platform describes.

use std::fmt;
use std::str::FromStr;

use crate::graph::PreconditionError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
	#[default]
	BreadthFirst,
	DepthFirst,
	Dijkstra,
}

impl Algorithm {
	pub const ALL: [Algorithm; 3] = [
		Algorithm::BreadthFirst,
		Algorithm::DepthFirst,
		Algorithm::Dijkstra,
	];

	/// Stable key used in the selector and the `algorithm` query parameter.
	pub fn key(self) -> &'static str {
		match self {
			Algorithm::BreadthFirst => "bfs",
			Algorithm::DepthFirst => "dfs",
			Algorithm::Dijkstra => "dijkstra",
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Algorithm::BreadthFirst => "Breadth-First Search",
			Algorithm::DepthFirst => "Depth-First Search",
			Algorithm::Dijkstra => "Dijkstra's Algorithm",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Algorithm::BreadthFirst => {
				"Explores all vertices at the present depth before moving to vertices at the next depth level."
			}
			Algorithm::DepthFirst => {
				"Explores as far as possible along each branch before backtracking."
			}
			Algorithm::Dijkstra => "Finds the shortest path between nodes in a graph.",
		}
	}

	pub fn complexity(self) -> &'static str {
		match self {
			Algorithm::BreadthFirst | Algorithm::DepthFirst => {
				"O(V + E) where V is the number of vertices and E is the number of edges."
			}
			Algorithm::Dijkstra => {
				"O((V + E) log V) where V is the number of vertices and E is the number of edges."
			}
		}
	}

	/// Only breadth-first search has a stepper behind it.
	pub fn is_runnable(self) -> bool {
		matches!(self, Algorithm::BreadthFirst)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = PreconditionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Algorithm::ALL
			.into_iter()
			.find(|a| a.key() == s)
			.ok_or_else(|| PreconditionError::InvalidParameter {
				key: "algorithm",
				value: s.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_parse_back() {
		for algorithm in Algorithm::ALL {
			assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
		}
		assert!("astar".parse::<Algorithm>().is_err());
	}

	#[test]
	fn only_bfs_runs() {
		let runnable: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_runnable()).collect();
		assert_eq!(runnable, vec![Algorithm::BreadthFirst]);
	}
}
