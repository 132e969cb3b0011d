// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

pub fn document() -> Option<Document> {
	web_sys::window().and_then(|window| window.document())
}

/// Looks up an element by ID, also requiring it to be of the expected element type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
	let element = document.get_element_by_id(id)?;
	match element.dyn_into::<T>() {
		Ok(element) => Some(element),
		Err(_) => {
			log::warn!("Element #{} is not of the expected type", id);
			None
		}
	}
}

/// Gets the element with the given ID, or creates a `div` with that ID and class at the end of the body
pub fn find_or_create_div(document: &Document, id: &str, class: &str) -> Result<Element, JsValue> {
	if let Some(element) = document.get_element_by_id(id) {
		return Ok(element);
	}
	let body = document
		.body()
		.ok_or_else(|| JsValue::from_str("the document has no body"))?;
	let element = document.create_element("div")?;
	element.set_id(id);
	element.set_class_name(class);
	body.append_child(&element)?;
	Ok(element)
}

/// Attaches an event handler that stays registered for the rest of the page's lifetime.
pub fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

fn is_still_loading(ready_state: &str) -> bool {
	ready_state == "loading"
}

/// Runs `f` once the document has been parsed.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
	if !is_still_loading(&document.ready_state()) {
		f();
		return Ok(());
	}
	let mut f = Some(f);
	listen(document, "DOMContentLoaded", move |_| {
		if let Some(f) = f.take() {
			f();
		}
	})
}

pub fn describe_js_error(error: &JsValue) -> String {
	error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_loading_state_waits_for_parsing() {
		assert!(is_still_loading("loading"));
		assert!(!is_still_loading("interactive"));
		assert!(!is_still_loading("complete"));
	}
}
