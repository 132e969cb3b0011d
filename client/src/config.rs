// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::toast::ToastTiming;
use serde::Deserialize;
use std::time::Duration;
use web_sys::Document;

/// ID of the optional JSON block a page can use to override client settings
pub const CONFIG_ELEMENT_ID: &str = "signup-client-config";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
	pub signup: SignupConfig,
	pub toast: ToastConfig,
}

impl ClientConfig {
	/// Reads the page's configuration block, falling back to the defaults when it's absent or unreadable.
	pub fn from_document(document: &Document) -> Self {
		let Some(config_text) = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.and_then(|element| element.text_content())
		else {
			return Self::default();
		};
		Self::from_json(&config_text)
	}

	pub fn from_json(config_text: &str) -> Self {
		match serde_json::from_str(config_text) {
			Ok(config) => config,
			Err(error) => {
				log::warn!("Ignoring invalid client configuration: {}", error);
				Self::default()
			}
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupConfig {
	pub elements: SignupElementIds,
	pub endpoints: SignupEndpoints,
	/// Selector locating the error message in a rejected signup's HTML response
	pub error_selector: String,
	pub redirect_delay_ms: u64,
	pub messages: SignupMessages,
}

impl SignupConfig {
	pub fn redirect_delay(&self) -> Duration {
		Duration::from_millis(self.redirect_delay_ms)
	}
}

impl Default for SignupConfig {
	fn default() -> Self {
		Self {
			elements: SignupElementIds::default(),
			endpoints: SignupEndpoints::default(),
			error_selector: String::from(".alert-error span"),
			redirect_delay_ms: 2000,
			messages: SignupMessages::default(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupElementIds {
	pub check_button: String,
	pub member_id_input: String,
	pub check_result: String,
	pub form: String,
}

impl Default for SignupElementIds {
	fn default() -> Self {
		Self {
			check_button: String::from("btnCheckId"),
			member_id_input: String::from("memberId"),
			check_result: String::from("idCheckResult"),
			form: String::from("signupForm"),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupEndpoints {
	pub check_id: String,
	pub signup: String,
	pub login: String,
}

impl Default for SignupEndpoints {
	fn default() -> Self {
		Self {
			check_id: String::from("/api/auth/check-id"),
			signup: String::from("/signup"),
			login: String::from("/login"),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupMessages {
	pub member_id_required: String,
	pub member_id_taken: String,
	pub member_id_available: String,
	pub generic_error: String,
	pub check_failed: String,
	pub signup_complete: String,
	pub signup_failed: String,
}

impl Default for SignupMessages {
	fn default() -> Self {
		Self {
			member_id_required: String::from("Please enter an ID."),
			member_id_taken: String::from("This ID is already in use."),
			member_id_available: String::from("This ID is available."),
			generic_error: String::from("An error occurred."),
			check_failed: String::from("An error occurred while checking the ID."),
			signup_complete: String::from("Your account has been created."),
			signup_failed: String::from("An error occurred during signup."),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
	pub container_id: String,
	pub reveal_delay_ms: u64,
	pub hold_ms: u64,
	pub transition_ms: u64,
}

impl ToastConfig {
	pub fn timing(&self) -> ToastTiming {
		ToastTiming {
			reveal_delay: Duration::from_millis(self.reveal_delay_ms),
			hold: Duration::from_millis(self.hold_ms),
			transition: Duration::from_millis(self.transition_ms),
		}
	}
}

impl Default for ToastConfig {
	fn default() -> Self {
		let timing = ToastTiming::default();
		Self {
			container_id: String::from("toast-container"),
			reveal_delay_ms: timing.reveal_delay.as_millis() as u64,
			hold_ms: timing.hold.as_millis() as u64,
			transition_ms: timing.transition.as_millis() as u64,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let config = ClientConfig::from_json("{}");
		assert_eq!(config.signup.elements.member_id_input, "memberId");
		assert_eq!(config.signup.endpoints.check_id, "/api/auth/check-id");
		assert_eq!(config.signup.endpoints.login, "/login");
		assert_eq!(config.signup.redirect_delay(), Duration::from_millis(2000));
		assert_eq!(config.toast.container_id, "toast-container");
		assert_eq!(config.toast.timing(), ToastTiming::default());
	}

	#[test]
	fn partial_overrides_keep_other_defaults() {
		let config = ClientConfig::from_json(
			r#"{
				"signup": {
					"endpoints": { "login": "/members/login" },
					"messages": { "memberIdRequired": "아이디를 입력해주세요." }
				},
				"toast": { "holdMs": 5000 }
			}"#,
		);
		assert_eq!(config.signup.endpoints.login, "/members/login");
		assert_eq!(config.signup.endpoints.signup, "/signup");
		assert_eq!(config.signup.messages.member_id_required, "아이디를 입력해주세요.");
		assert_eq!(config.signup.messages.member_id_taken, "This ID is already in use.");
		assert_eq!(config.toast.hold_ms, 5000);
		assert_eq!(config.toast.reveal_delay_ms, 10);
	}

	#[test]
	fn malformed_json_falls_back_to_defaults() {
		let config = ClientConfig::from_json("{ not json");
		assert_eq!(config.signup.error_selector, ".alert-error span");
		assert_eq!(config.toast.transition_ms, 300);
	}
}
