// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

/// Where a toast is in its on-screen lifetime. Toasts only ever move forward through these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ToastPhase {
	/// Inserted into the page but not yet showing, so the reveal can animate
	Created,
	Visible,
	/// Fading out
	Hiding,
	Removed,
}

impl ToastPhase {
	pub fn next(self) -> Option<Self> {
		match self {
			Self::Created => Some(Self::Visible),
			Self::Visible => Some(Self::Hiding),
			Self::Hiding => Some(Self::Removed),
			Self::Removed => None,
		}
	}

	/// How long a toast stays in this phase before moving to the next one
	pub fn duration(self, timing: &ToastTiming) -> Option<Duration> {
		match self {
			Self::Created => Some(timing.reveal_delay),
			Self::Visible => Some(timing.hold.saturating_sub(timing.reveal_delay)),
			Self::Hiding => Some(timing.transition),
			Self::Removed => None,
		}
	}

	pub fn is_shown(self) -> bool {
		self == Self::Visible
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToastTiming {
	/// Gap between inserting a toast and revealing it
	pub reveal_delay: Duration,
	/// Time from insertion until the toast starts hiding
	pub hold: Duration,
	/// Length of the hide transition before the toast is removed
	pub transition: Duration,
}

impl Default for ToastTiming {
	fn default() -> Self {
		Self {
			reveal_delay: Duration::from_millis(10),
			hold: Duration::from_millis(3000),
			transition: Duration::from_millis(300),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn phases_advance_in_order_and_end_at_removed() {
		let mut phase = ToastPhase::Created;
		let mut visited = vec![phase];
		while let Some(next) = phase.next() {
			phase = next;
			visited.push(phase);
		}
		assert_eq!(
			visited,
			vec![
				ToastPhase::Created,
				ToastPhase::Visible,
				ToastPhase::Hiding,
				ToastPhase::Removed
			]
		);
	}

	#[test]
	fn phase_durations_add_up_to_hold_plus_transition() {
		let timing = ToastTiming::default();
		let total: Duration = [ToastPhase::Created, ToastPhase::Visible, ToastPhase::Hiding]
			.into_iter()
			.filter_map(|phase| phase.duration(&timing))
			.sum();
		assert_eq!(total, Duration::from_millis(3300));
		assert_eq!(ToastPhase::Removed.duration(&timing), None);
	}

	#[test]
	fn hold_shorter_than_reveal_does_not_underflow() {
		let timing = ToastTiming {
			reveal_delay: Duration::from_millis(50),
			hold: Duration::from_millis(20),
			transition: Duration::from_millis(5),
		};
		assert_eq!(ToastPhase::Visible.duration(&timing), Some(Duration::ZERO));
	}

	#[test]
	fn only_visible_is_shown() {
		assert!(!ToastPhase::Created.is_shown());
		assert!(ToastPhase::Visible.is_shown());
		assert!(!ToastPhase::Hiding.is_shown());
	}
}
