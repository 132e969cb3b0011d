// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use config::ClientConfig;
use scheduler::TimeoutScheduler;
use toast::{DomToastView, NoopNotifier, Toaster};

mod config;
mod dom;
mod error;
mod scheduler;
mod signup;
mod toast;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let Some(document) = dom::document() else {
		log::error!("Unable to start: no browser document is available");
		return;
	};

	let ready_document = document.clone();
	let result = dom::when_ready(&document, move || {
		let document = ready_document;
		let config = ClientConfig::from_document(&document);
		let scheduler = TimeoutScheduler;
		if document.body().is_none() {
			log::warn!("The page has no body to show notifications in; notifications are disabled");
			signup::attach(&document, config.signup, NoopNotifier, scheduler);
			return;
		}
		let toaster = Toaster::new(
			DomToastView::new(&config.toast.container_id),
			scheduler,
			config.toast.timing(),
		);
		signup::attach(&document, config.signup, toaster, scheduler);
	});
	if let Err(error) = result {
		log::error!("Unable to start: {}", dom::describe_js_error(&error));
	}
}
