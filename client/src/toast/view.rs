// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Severity, Toast, ToastId, ToastPhase};
use crate::dom::{describe_js_error, document, find_or_create_div};
use std::cell::Cell;
use std::hash::{Hash, Hasher};
use sycamore::prelude::*;

const CONTAINER_CLASS: &str = "toast-container";

/// Displays toasts as they move through their lifecycle
pub trait ToastView {
	fn mount(&self, toast: &Toast);
	fn update(&self, id: ToastId, phase: ToastPhase);
	fn unmount(&self, id: ToastId);
}

#[derive(Clone)]
struct ToastItem {
	id: ToastId,
	severity: Severity,
	message: String,
	phase: RcSignal<ToastPhase>,
}

impl PartialEq for ToastItem {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for ToastItem {}

impl Hash for ToastItem {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

fn toast_class(severity: Severity, phase: ToastPhase) -> String {
	if phase.is_shown() {
		format!("toast {} show", severity.class_name())
	} else {
		format!("toast {}", severity.class_name())
	}
}

fn toast_stack_view<G: Html>(ctx: Scope<'_>, toasts: RcSignal<Vec<ToastItem>>) -> View<G> {
	let toasts = create_memo(ctx, move || (*toasts.get()).clone());

	view! {
		ctx,
		Keyed(
			iterable=toasts,
			view=|ctx, toast| {
				let ToastItem { severity, message, phase, .. } = toast;
				view! {
					ctx,
					div(class=toast_class(severity, *phase.get())) { (message) }
				}
			},
			key=|toast| toast.id
		)
	}
}

/// Renders toasts into a single container element at the end of the page body.
///
/// The container is found or created the first time a toast is shown and reused for the rest of the page's lifetime.
pub struct DomToastView {
	container_id: String,
	toasts: RcSignal<Vec<ToastItem>>,
	rendered: Cell<bool>,
}

impl DomToastView {
	pub fn new(container_id: &str) -> Self {
		Self {
			container_id: container_id.to_owned(),
			toasts: create_rc_signal(Vec::new()),
			rendered: Cell::new(false),
		}
	}

	fn ensure_rendered(&self) {
		if self.rendered.get() {
			return;
		}
		let Some(document) = document() else {
			log::error!("Unable to show notifications: no document is available");
			return;
		};
		let container = match find_or_create_div(&document, &self.container_id, CONTAINER_CLASS) {
			Ok(container) => container,
			Err(error) => {
				log::error!(
					"Unable to create the notification container: {}",
					describe_js_error(&error)
				);
				return;
			}
		};

		let toasts = self.toasts.clone();
		sycamore::render_to(move |ctx| toast_stack_view(ctx, toasts), &container);
		self.rendered.set(true);
	}
}

impl ToastView for DomToastView {
	fn mount(&self, toast: &Toast) {
		self.ensure_rendered();
		self.toasts.modify().push(ToastItem {
			id: toast.id,
			severity: toast.severity,
			message: toast.message.clone(),
			phase: create_rc_signal(ToastPhase::Created),
		});
	}

	fn update(&self, id: ToastId, phase: ToastPhase) {
		if let Some(item) = self.toasts.get().iter().find(|item| item.id == id) {
			item.phase.set(phase);
		}
	}

	fn unmount(&self, id: ToastId) {
		self.toasts.modify().retain(|item| item.id != id);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shown_toasts_get_the_show_class() {
		assert_eq!(toast_class(Severity::Success, ToastPhase::Visible), "toast toast-success show");
	}

	#[test]
	fn hidden_phases_use_only_the_severity_class() {
		assert_eq!(toast_class(Severity::Error, ToastPhase::Created), "toast toast-error");
		assert_eq!(toast_class(Severity::Info, ToastPhase::Hiding), "toast toast-info");
	}
}
