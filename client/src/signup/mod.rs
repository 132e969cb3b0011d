// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::SignupConfig;
use crate::error::RequestError;
use crate::scheduler::Scheduler;
use crate::toast::Notifier;
use signup_shared::messages::ApiResponse;
use std::cell::Cell;
use std::rc::Rc;

mod api;
pub use api::HttpSignupApi;

mod page;
pub use page::attach;

/// How the helper text under the member ID field is styled
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HelperStyle {
	Neutral,
	Error,
	Success,
}

impl HelperStyle {
	pub fn class_name(self) -> &'static str {
		match self {
			Self::Neutral => "helper-text",
			Self::Error => "helper-text error",
			Self::Success => "helper-text success",
		}
	}
}

/// The parts of the signup page the controller reads from and writes to
pub trait SignupPage {
	fn member_id(&self) -> String;
	fn focus_member_id(&self);
	fn set_helper_text(&self, text: &str, style: HelperStyle);
	fn navigate_to(&self, path: &str);
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SignupResponse {
	Accepted,
	/// The server turned the signup down, optionally explaining why
	Rejected {
		error_message: Option<String>,
	},
}

#[allow(async_fn_in_trait)]
pub trait SignupApi {
	type Form;

	/// Asks the server whether a member ID is already registered. The response data is `true` when it is.
	async fn check_member_id(&self, member_id: &str) -> Result<ApiResponse<bool>, RequestError>;

	async fn submit_signup(&self, form: Self::Form) -> Result<SignupResponse, RequestError>;
}

struct ControllerState<P, A, N, S> {
	page: P,
	api: A,
	notifier: N,
	scheduler: S,
	config: SignupConfig,
	member_id_checked: Cell<bool>,
	check_generation: Cell<u64>,
}

/// Drives the member ID availability check and form submission for the signup page.
pub struct SignupController<P, A, N, S> {
	state: Rc<ControllerState<P, A, N, S>>,
}

impl<P, A, N, S> Clone for SignupController<P, A, N, S> {
	fn clone(&self) -> Self {
		Self {
			state: Rc::clone(&self.state),
		}
	}
}

impl<P, A, N, S> SignupController<P, A, N, S>
where
	P: SignupPage + 'static,
	A: SignupApi + 'static,
	N: Notifier + 'static,
	S: Scheduler + 'static,
{
	pub fn new(page: P, api: A, notifier: N, scheduler: S, config: SignupConfig) -> Self {
		let state = ControllerState {
			page,
			api,
			notifier,
			scheduler,
			config,
			member_id_checked: Cell::new(false),
			check_generation: Cell::new(0),
		};
		Self { state: Rc::new(state) }
	}

	/// Whether the most recent availability check reported the current member ID as available.
	///
	/// This is informational only; submitting the form doesn't depend on it.
	pub fn is_member_id_checked(&self) -> bool {
		self.state.member_id_checked.get()
	}

	fn next_check_generation(&self) -> u64 {
		let generation = self.state.check_generation.get() + 1;
		self.state.check_generation.set(generation);
		generation
	}

	/// Any edit invalidates the last check result, including one that's still in flight.
	pub fn member_id_changed(&self) {
		self.state.member_id_checked.set(false);
		self.next_check_generation();
		self.state.page.set_helper_text("", HelperStyle::Neutral);
	}

	pub async fn check_member_id_availability(&self) {
		let state = &self.state;
		let messages = &state.config.messages;
		let member_id = state.page.member_id();

		if member_id.is_empty() {
			state.notifier.error(&messages.member_id_required);
			state.page.focus_member_id();
			return;
		}

		let generation = self.next_check_generation();
		let result = state.api.check_member_id(&member_id).await;
		if state.check_generation.get() != generation {
			match result {
				Ok(_) => log::debug!("Discarding outdated availability result for member ID {}", member_id),
				Err(error) => log::warn!(
					"Outdated availability check for member ID {} failed: {}",
					member_id,
					error
				),
			}
			return;
		}

		let response = match result {
			Ok(response) => response,
			Err(error) => {
				log::error!("Failed to check availability of member ID {}: {}", member_id, error);
				state.notifier.error(&messages.check_failed);
				return;
			}
		};

		if !response.success {
			let message = response.message.as_deref().unwrap_or(messages.generic_error.as_str());
			state.notifier.error(message);
			return;
		}

		match response.data {
			Some(true) => {
				state.page.set_helper_text(&messages.member_id_taken, HelperStyle::Error);
				state.member_id_checked.set(false);
			}
			Some(false) => {
				state
					.page
					.set_helper_text(&messages.member_id_available, HelperStyle::Success);
				state.member_id_checked.set(true);
			}
			None => {
				log::error!(
					"Failed to check availability of member ID {}: {}",
					member_id,
					RequestError::MissingData
				);
				state.notifier.error(&messages.check_failed);
			}
		}
	}

	pub async fn submit(&self, form: A::Form) {
		let state = &self.state;
		let messages = &state.config.messages;

		// Submission is allowed without a successful availability check; the server makes the final call.
		if !self.is_member_id_checked() {
			log::debug!("Submitting signup without a confirmed member ID availability check");
		}

		match state.api.submit_signup(form).await {
			Ok(SignupResponse::Accepted) => {
				state.notifier.success(&messages.signup_complete);
				let redirect_state = Rc::clone(state);
				state.scheduler.schedule(
					state.config.redirect_delay(),
					Box::new(move || {
						let login_path = &redirect_state.config.endpoints.login;
						log::info!("Signup complete; redirecting to {}", login_path);
						redirect_state.page.navigate_to(login_path);
					}),
				);
			}
			Ok(SignupResponse::Rejected {
				error_message: Some(error_message),
			}) => state.notifier.error(&error_message),
			Ok(SignupResponse::Rejected { error_message: None }) => {
				log::debug!("Signup was rejected without an error message to show");
			}
			Err(error) => {
				log::error!("Failed to submit signup: {}", error);
				state.notifier.error(&messages.signup_failed);
			}
		}
	}
}
