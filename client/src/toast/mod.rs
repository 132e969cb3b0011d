// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

mod lifecycle;
pub use lifecycle::{ToastPhase, ToastTiming};

mod view;
pub use view::{DomToastView, ToastView};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Severity {
	Success,
	Error,
	Info,
}

impl Severity {
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Success => "toast-success",
			Self::Error => "toast-error",
			Self::Info => "toast-info",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Success => write!(f, "success"),
			Self::Error => write!(f, "error"),
			Self::Info => write!(f, "info"),
		}
	}
}

/// Something that can show short, non-blocking messages to the user
pub trait Notifier {
	fn notify(&self, severity: Severity, message: &str);

	fn success(&self, message: &str) {
		self.notify(Severity::Success, message);
	}

	fn error(&self, message: &str) {
		self.notify(Severity::Error, message);
	}

	fn info(&self, message: &str) {
		self.notify(Severity::Info, message);
	}
}

/// A notifier for pages that have nowhere to show messages
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
	fn notify(&self, _severity: Severity, _message: &str) {}
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ToastId(u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
	pub id: ToastId,
	pub severity: Severity,
	pub message: String,
}

struct ToasterState<V, S> {
	view: V,
	scheduler: S,
	timing: ToastTiming,
	next_id: Cell<u64>,
}

/// Shows each message as its own toast and walks it through its lifecycle on the scheduler.
pub struct Toaster<V, S> {
	state: Rc<ToasterState<V, S>>,
}

impl<V, S> Clone for Toaster<V, S> {
	fn clone(&self) -> Self {
		Self {
			state: Rc::clone(&self.state),
		}
	}
}

impl<V: ToastView + 'static, S: Scheduler + 'static> Toaster<V, S> {
	pub fn new(view: V, scheduler: S, timing: ToastTiming) -> Self {
		log::info!("Toast notifications initialized");
		let state = ToasterState {
			view,
			scheduler,
			timing,
			next_id: Cell::new(0),
		};
		Self { state: Rc::new(state) }
	}

	fn show(&self, severity: Severity, message: &str) -> ToastId {
		let id = ToastId(self.state.next_id.get());
		self.state.next_id.set(id.0 + 1);

		let toast = Toast {
			id,
			severity,
			message: message.to_owned(),
		};
		log::debug!("Showing {} notification: {}", severity, message);
		self.state.view.mount(&toast);
		self.schedule_next_phase(id, ToastPhase::Created);
		id
	}

	fn schedule_next_phase(&self, id: ToastId, current: ToastPhase) {
		let Some(delay) = current.duration(&self.state.timing) else {
			return;
		};
		let toaster = self.clone();
		self.state
			.scheduler
			.schedule(delay, Box::new(move || toaster.advance(id, current)));
	}

	fn advance(&self, id: ToastId, from: ToastPhase) {
		let Some(next) = from.next() else {
			return;
		};
		if next == ToastPhase::Removed {
			self.state.view.unmount(id);
		} else {
			self.state.view.update(id, next);
		}
		self.schedule_next_phase(id, next);
	}
}

impl<V: ToastView + 'static, S: Scheduler + 'static> Notifier for Toaster<V, S> {
	fn notify(&self, severity: Severity, message: &str) {
		self.show(severity, message);
	}
}
