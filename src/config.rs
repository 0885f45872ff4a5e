//! Tunables read from the page URL, e.g. `/?nodes=15&interval=500&algorithm=bfs`.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::graph::{Layout, PreconditionError};

pub const DEFAULT_NODE_COUNT: usize = 10;
pub const DEFAULT_TICK_MS: u64 = 1000;

const NODE_COUNT_RANGE: RangeInclusive<i64> = 1..=64;
const TICK_MS_RANGE: RangeInclusive<i64> = 50..=10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformConfig {
	pub node_count: usize,
	pub tick_interval: Duration,
	pub algorithm: Algorithm,
	pub layout: Layout,
}

impl Default for PlatformConfig {
	fn default() -> Self {
		Self {
			node_count: DEFAULT_NODE_COUNT,
			tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
			algorithm: Algorithm::default(),
			layout: Layout::default(),
		}
	}
}

impl PlatformConfig {
	/// Build a config from a parameter lookup. Missing keys keep their defaults.
	pub fn from_params<F>(get: F) -> Result<Self, PreconditionError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default();

		if let Some(raw) = get("nodes") {
			let n = parse_int("nodes", &raw)?;
			if n <= 0 {
				return Err(PreconditionError::NodeCount);
			}
			config.node_count = in_range("nodes", &raw, n, NODE_COUNT_RANGE)? as usize;
		}
		if let Some(raw) = get("interval") {
			let ms = parse_int("interval", &raw)?;
			config.tick_interval =
				Duration::from_millis(in_range("interval", &raw, ms, TICK_MS_RANGE)? as u64);
		}
		if let Some(raw) = get("algorithm") {
			config.algorithm = raw.trim().parse()?;
		}

		Ok(config)
	}
}

fn parse_int(key: &'static str, raw: &str) -> Result<i64, PreconditionError> {
	raw.trim()
		.parse()
		.map_err(|_| PreconditionError::InvalidParameter {
			key,
			value: raw.to_string(),
		})
}

fn in_range(
	key: &'static str,
	raw: &str,
	value: i64,
	range: RangeInclusive<i64>,
) -> Result<i64, PreconditionError> {
	if range.contains(&value) {
		Ok(value)
	} else {
		Err(PreconditionError::InvalidParameter {
			key,
			value: raw.to_string(),
		})
	}
}
