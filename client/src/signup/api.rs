// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{SignupApi, SignupResponse};
use crate::config::SignupConfig;
use crate::dom::describe_js_error;
use crate::error::RequestError;
use gloo_net::http::Request;
use signup_shared::messages::member::MEMBER_ID_QUERY_PARAMETER;
use signup_shared::messages::ApiResponse;
use web_sys::{DomParser, FormData, HtmlFormElement, SupportedType, UrlSearchParams};

/// Talks to the signup endpoints with `fetch`
pub struct HttpSignupApi {
	check_id_endpoint: String,
	signup_endpoint: String,
	error_selector: String,
}

impl HttpSignupApi {
	pub fn new(config: &SignupConfig) -> Self {
		Self {
			check_id_endpoint: config.endpoints.check_id.clone(),
			signup_endpoint: config.endpoints.signup.clone(),
			error_selector: config.error_selector.clone(),
		}
	}
}

impl SignupApi for HttpSignupApi {
	type Form = HtmlFormElement;

	async fn check_member_id(&self, member_id: &str) -> Result<ApiResponse<bool>, RequestError> {
		let response = Request::get(&self.check_id_endpoint)
			.query([(MEMBER_ID_QUERY_PARAMETER, member_id)])
			.send()
			.await?;
		if !response.ok() {
			return Err(RequestError::Status(response.status()));
		}
		Ok(response.json().await?)
	}

	async fn submit_signup(&self, form: HtmlFormElement) -> Result<SignupResponse, RequestError> {
		let body = url_encoded_fields(&form)?;
		let response = Request::post(&self.signup_endpoint).body(body)?.send().await?;
		if is_accepted(response.redirected(), response.ok()) {
			return Ok(SignupResponse::Accepted);
		}

		let page = response.text().await?;
		let error_message = find_error_message(&page, &self.error_selector)?;
		Ok(SignupResponse::Rejected { error_message })
	}
}

/// The server answers a successful signup by redirecting to the login page, or with a plain success status
fn is_accepted(redirected: bool, ok: bool) -> bool {
	redirected || ok
}

fn url_encoded_fields(form: &HtmlFormElement) -> Result<UrlSearchParams, RequestError> {
	let form_data = FormData::new_with_form(form).map_err(|error| RequestError::Dom(describe_js_error(&error)))?;
	UrlSearchParams::new_with_str_sequence_sequence(&form_data)
		.map_err(|error| RequestError::Dom(describe_js_error(&error)))
}

/// Pulls the text of the first element matching `selector` out of an HTML page
fn find_error_message(html: &str, selector: &str) -> Result<Option<String>, RequestError> {
	let parser = DomParser::new().map_err(|error| RequestError::Dom(describe_js_error(&error)))?;
	let document = parser
		.parse_from_string(html, SupportedType::TextHtml)
		.map_err(|error| RequestError::Dom(describe_js_error(&error)))?;
	let element = document
		.query_selector(selector)
		.map_err(|error| RequestError::Dom(describe_js_error(&error)))?;
	Ok(element.map(|element| element.text_content().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn redirect_or_success_status_is_accepted() {
		assert!(is_accepted(true, false));
		assert!(is_accepted(false, true));
		assert!(is_accepted(true, true));
	}

	#[test]
	fn error_status_without_redirect_is_not_accepted() {
		assert!(!is_accepted(false, false));
	}
}
