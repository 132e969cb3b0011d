// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

pub mod member;

/// Envelope the server wraps around every JSON API result
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	pub data: Option<T>,
	pub message: Option<String>,
}
