// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{HelperStyle, HttpSignupApi, SignupController, SignupPage};
use crate::config::SignupConfig;
use crate::dom::{describe_js_error, element_by_id, listen};
use crate::scheduler::Scheduler;
use crate::toast::Notifier;
use sycamore::futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

/// The signup page as rendered by the server. Any of its elements may be missing.
pub struct DomSignupPage {
	member_id_input: Option<HtmlInputElement>,
	check_result: Option<Element>,
}

impl DomSignupPage {
	pub fn locate(document: &Document, config: &SignupConfig) -> Self {
		Self {
			member_id_input: element_by_id(document, &config.elements.member_id_input),
			check_result: document.get_element_by_id(&config.elements.check_result),
		}
	}
}

impl SignupPage for DomSignupPage {
	fn member_id(&self) -> String {
		self.member_id_input
			.as_ref()
			.map(|input| input.value())
			.unwrap_or_default()
	}

	fn focus_member_id(&self) {
		if let Some(input) = self.member_id_input.as_ref() {
			if let Err(error) = input.focus() {
				log::warn!("Failed to focus the member ID field: {}", describe_js_error(&error));
			}
		}
	}

	fn set_helper_text(&self, text: &str, style: HelperStyle) {
		if let Some(check_result) = self.check_result.as_ref() {
			check_result.set_text_content(Some(text));
			check_result.set_class_name(style.class_name());
		}
	}

	fn navigate_to(&self, path: &str) {
		let Some(window) = web_sys::window() else {
			log::error!("Unable to navigate to {}: no browser window", path);
			return;
		};
		if let Err(error) = window.location().set_href(path) {
			log::error!("Unable to navigate to {}: {}", path, describe_js_error(&error));
		}
	}
}

/// Hooks the signup behavior up to whichever signup page elements exist.
pub fn attach<N, S>(document: &Document, config: SignupConfig, notifier: N, scheduler: S)
where
	N: Notifier + 'static,
	S: Scheduler + 'static,
{
	let check_button: Option<HtmlButtonElement> = element_by_id(document, &config.elements.check_button);
	let member_id_input: Option<HtmlInputElement> = element_by_id(document, &config.elements.member_id_input);
	let form: Option<HtmlFormElement> = element_by_id(document, &config.elements.form);

	let page = DomSignupPage::locate(document, &config);
	let api = HttpSignupApi::new(&config);
	let controller = SignupController::new(page, api, notifier, scheduler, config);

	if let Some(check_button) = check_button {
		let controller = controller.clone();
		let result = listen(&check_button, "click", move |_| {
			let controller = controller.clone();
			spawn_local(async move { controller.check_member_id_availability().await });
		});
		if let Err(error) = result {
			log::error!("Failed to set up the member ID check: {}", describe_js_error(&error));
		}
	} else {
		log::debug!("No member ID check button on this page");
	}

	if let Some(member_id_input) = member_id_input {
		let controller = controller.clone();
		let result = listen(&member_id_input, "input", move |_| controller.member_id_changed());
		if let Err(error) = result {
			log::error!("Failed to watch the member ID field: {}", describe_js_error(&error));
		}
	}

	if let Some(form) = form {
		let submitted_form = form.clone();
		let result = listen(&form, "submit", move |event| {
			event.prevent_default();
			let controller = controller.clone();
			let form = submitted_form.clone();
			spawn_local(async move { controller.submit(form).await });
		});
		if let Err(error) = result {
			log::error!("Failed to set up signup submission: {}", describe_js_error(&error));
		}
	} else {
		log::debug!("No signup form on this page");
	}
}
