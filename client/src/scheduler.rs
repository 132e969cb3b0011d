// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Runs deferred work on the page's event loop.
///
/// Everything that happens "later" (toast transitions, the post-signup redirect) goes through one of these, so
/// time can be simulated in tests.
pub trait Scheduler {
	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Schedules work with browser timeouts
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
	fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		Timeout::new(millis, task).forget();
	}
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
	use super::Scheduler;
	use std::cell::RefCell;
	use std::rc::Rc;
	use std::time::Duration;

	struct PendingTask {
		due: Duration,
		order: u64,
		task: Box<dyn FnOnce()>,
	}

	#[derive(Default)]
	struct ManualState {
		now: Duration,
		next_order: u64,
		pending: Vec<PendingTask>,
	}

	/// A scheduler with a virtual clock that only moves when told to
	#[derive(Clone, Default)]
	pub struct ManualScheduler {
		state: Rc<RefCell<ManualState>>,
	}

	impl ManualScheduler {
		pub fn new() -> Self {
			Self::default()
		}

		pub fn pending(&self) -> usize {
			self.state.borrow().pending.len()
		}

		/// Moves the clock forward, running every task that comes due in order, including tasks scheduled by
		/// those tasks.
		pub fn advance(&self, by: Duration) {
			let target = self.state.borrow().now + by;
			loop {
				let task = {
					let mut state = self.state.borrow_mut();
					let next = state
						.pending
						.iter()
						.enumerate()
						.filter(|(_, pending)| pending.due <= target)
						.min_by_key(|(_, pending)| (pending.due, pending.order))
						.map(|(index, _)| index);
					match next {
						Some(index) => {
							let pending = state.pending.remove(index);
							state.now = pending.due;
							pending.task
						}
						None => break,
					}
				};
				task();
			}
			self.state.borrow_mut().now = target;
		}

		pub fn advance_millis(&self, millis: u64) {
			self.advance(Duration::from_millis(millis));
		}
	}

	impl Scheduler for ManualScheduler {
		fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
			let mut state = self.state.borrow_mut();
			let due = state.now + delay;
			let order = state.next_order;
			state.next_order += 1;
			state.pending.push(PendingTask { due, order, task });
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;
	use std::rc::Rc;

	#[test]
	fn tasks_run_in_due_order() {
		let scheduler = ManualScheduler::new();
		let log = Rc::new(RefCell::new(Vec::new()));
		for (name, millis) in [("late", 30), ("early", 10), ("middle", 20)] {
			let log = Rc::clone(&log);
			scheduler.schedule(Duration::from_millis(millis), Box::new(move || log.borrow_mut().push(name)));
		}

		scheduler.advance_millis(15);
		assert_eq!(*log.borrow(), vec!["early"]);
		scheduler.advance_millis(15);
		assert_eq!(*log.borrow(), vec!["early", "middle", "late"]);
		assert_eq!(scheduler.pending(), 0);
	}

	#[test]
	fn tasks_scheduled_by_tasks_run_within_the_same_advance() {
		let scheduler = ManualScheduler::new();
		let ran_at_end = Rc::new(RefCell::new(false));
		{
			let inner_scheduler = scheduler.clone();
			let ran_at_end = Rc::clone(&ran_at_end);
			scheduler.schedule(
				Duration::from_millis(5),
				Box::new(move || {
					inner_scheduler.schedule(Duration::from_millis(5), Box::new(move || *ran_at_end.borrow_mut() = true));
				}),
			);
		}

		scheduler.advance_millis(9);
		assert!(!*ran_at_end.borrow());
		scheduler.advance_millis(1);
		assert!(*ran_at_end.borrow());
	}
}
