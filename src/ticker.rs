//! Ownership of the interval that drives a run.

use leptos::prelude::IntervalHandle;

use crate::session::{RunToken, TickOutcome};

/// A scheduled callback that can be cancelled.
pub trait Cancel {
	fn cancel(self);
}

impl Cancel for IntervalHandle {
	fn cancel(self) {
		IntervalHandle::clear(&self);
	}
}

/// Holds at most one live interval, tagged with the run it drives.
///
/// Starting a new interval, stopping, a finished or stale tick, and dropping
/// the ticker all cancel the held handle.
pub struct Ticker<H: Cancel> {
	active: Option<(H, RunToken)>,
}

impl<H: Cancel> Default for Ticker<H> {
	fn default() -> Self {
		Self { active: None }
	}
}

impl<H: Cancel> Ticker<H> {
	pub fn start(&mut self, handle: H, token: RunToken) {
		self.stop();
		self.active = Some((handle, token));
	}

	pub fn stop(&mut self) {
		if let Some((handle, _)) = self.active.take() {
			handle.cancel();
		}
	}

	/// Record the outcome of a tick for run `token`. `None` means the session
	/// is gone. Ticks of an older run never stop a newer interval.
	pub fn observe(&mut self, token: RunToken, outcome: Option<TickOutcome>) {
		let live = outcome.is_some_and(TickOutcome::is_live);
		let ours = matches!(self.active, Some((_, t)) if t == token);
		if ours && !live {
			self.stop();
		}
	}
}

impl<H: Cancel> Drop for Ticker<H> {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::graph::{Finish, NodeId};

	#[derive(Clone, Default)]
	struct Log(Rc<RefCell<Vec<u32>>>);

	struct FakeHandle(u32, Log);

	impl Cancel for FakeHandle {
		fn cancel(self) {
			let FakeHandle(id, log) = self;
			log.0.borrow_mut().push(id);
		}
	}

	fn cancelled(log: &Log) -> Vec<u32> {
		log.0.borrow().clone()
	}

	const DONE: TickOutcome = TickOutcome::Finished(Finish {
		reached_destination: true,
		steps: 2,
	});

	#[test]
	fn live_ticks_keep_the_interval() {
		let log = Log::default();
		let mut ticker = Ticker::default();
		ticker.start(FakeHandle(1, log.clone()), RunToken(1));

		ticker.observe(RunToken(1), Some(TickOutcome::Visited(NodeId(0))));
		ticker.observe(RunToken(1), Some(TickOutcome::Skipped(NodeId(0))));
		assert!(ticker.active.is_some());
		assert!(cancelled(&log).is_empty());

		ticker.observe(RunToken(1), Some(DONE));
		assert!(ticker.active.is_none());
		assert_eq!(cancelled(&log), vec![1]);
	}

	#[test]
	fn stale_or_missing_session_stops_its_own_interval() {
		let log = Log::default();
		let mut ticker = Ticker::default();
		ticker.start(FakeHandle(1, log.clone()), RunToken(3));
		ticker.observe(RunToken(3), Some(TickOutcome::Stale));
		assert_eq!(cancelled(&log), vec![1]);

		ticker.start(FakeHandle(2, log.clone()), RunToken(4));
		ticker.observe(RunToken(4), None);
		assert_eq!(cancelled(&log), vec![1, 2]);
	}

	#[test]
	fn new_run_cancels_previous_interval() {
		let log = Log::default();
		let mut ticker = Ticker::default();
		ticker.start(FakeHandle(1, log.clone()), RunToken(1));
		ticker.start(FakeHandle(2, log.clone()), RunToken(2));
		assert_eq!(cancelled(&log), vec![1]);

		// A late tick from the first run leaves the second interval alone.
		ticker.observe(RunToken(1), Some(TickOutcome::Stale));
		assert!(ticker.active.is_some());
		assert_eq!(cancelled(&log), vec![1]);
	}

	#[test]
	fn reset_stops_once() {
		let log = Log::default();
		let mut ticker = Ticker::default();
		ticker.start(FakeHandle(1, log.clone()), RunToken(1));
		ticker.stop();
		ticker.stop();
		assert_eq!(cancelled(&log), vec![1]);
	}

	#[test]
	fn dropping_cancels_the_interval() {
		let log = Log::default();
		{
			let mut ticker = Ticker::default();
			ticker.start(FakeHandle(5, log.clone()), RunToken(1));
		}
		assert_eq!(cancelled(&log), vec![5]);

		drop(Ticker::<FakeHandle>::default());
		assert_eq!(cancelled(&log), vec![5]);
	}
}
