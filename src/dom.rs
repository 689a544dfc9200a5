//! Small DOM helpers shared by the effect components.
//!
//! Lookups return `Option`/`Vec` so callers can treat a missing element as a
//! quiet no-op.

use gloo_events::EventListener;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

/// Current viewport size as `(innerWidth, innerHeight)`.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// First element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
	document.query_selector(selector).ok()??.dyn_into().ok()
}

/// First descendant of `parent` matching `selector`.
pub fn query_in(parent: &Element, selector: &str) -> Option<HtmlElement> {
	parent.query_selector(selector).ok()??.dyn_into().ok()
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
	let Ok(list) = document.query_selector_all(selector) else {
		warn!("portfolio-fx: invalid selector {selector:?}");
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
		.collect()
}

/// Set several inline style properties at once.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) {
	let style = el.style();
	for (name, value) in props {
		let _ = style.set_property(name, value);
	}
}

/// Run `f` once after `ms` milliseconds.
///
/// The callback frees itself after running, so this suits fire-and-forget work
/// that never needs cancelling.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	if let Err(e) =
		window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms as i32)
	{
		warn!("portfolio-fx: setTimeout failed: {:?}", e);
	}
}

/// Add `class` to `el`, then remove it after `ms` milliseconds.
pub fn pulse_class(el: &Element, class: &'static str, ms: u32) {
	let _ = el.class_list().add_1(class);
	let el = el.clone();
	after(ms, move || {
		let _ = el.class_list().remove_1(class);
	});
}

/// Run `f` once the DOM is parsed. Runs immediately if it already is.
pub fn when_ready(document: &Document, f: impl FnOnce() + 'static) -> Option<EventListener> {
	if document.ready_state() == "loading" {
		Some(EventListener::once(document, "DOMContentLoaded", move |_| f()))
	} else {
		f();
		None
	}
}

/// Run `f` once the page has fully loaded. Runs immediately if it already has.
pub fn when_loaded(
	window: &Window,
	document: &Document,
	f: impl FnOnce() + 'static,
) -> Option<EventListener> {
	if document.ready_state() == "complete" {
		f();
		None
	} else {
		Some(EventListener::once(window, "load", move |_| f()))
	}
}
