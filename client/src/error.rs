// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;

/// Failures while talking to the signup endpoints
#[derive(Debug)]
pub enum RequestError {
	Network(gloo_net::Error),
	Status(u16),
	MissingData,
	Dom(String),
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Request failed: {}", error),
			Self::Status(status) => write!(f, "The server responded with status {}", status),
			Self::MissingData => write!(f, "The server response did not include any data"),
			Self::Dom(details) => write!(f, "A browser operation failed: {}", details),
		}
	}
}

impl Error for RequestError {}
