//! Scroll-driven hero parallax and header styling.
//!
//! Parallax work is coalesced to at most one pending animation frame through
//! a [`FrameThrottle`]; header styling runs directly on each scroll event.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlMediaElement, Window};

use crate::config::{HeaderConfig, ParallaxConfig};
use crate::dom::{query, set_styles};

/// Hero offset and fade for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
	/// Vertical offset in pixels.
	pub translate_y: f64,
	pub opacity: f64,
}

impl ParallaxConfig {
	/// Hero styling at `scrolled` pixels, or `None` once the hero has scrolled
	/// a full viewport away and is left untouched.
	pub fn hero_frame(&self, scrolled: f64, viewport_height: f64) -> Option<HeroFrame> {
		if scrolled >= viewport_height {
			return None;
		}
		Some(HeroFrame {
			translate_y: scrolled * self.offset_factor,
			opacity: 1.0 - (scrolled / viewport_height) * self.fade_factor,
		})
	}
}

/// Inline header styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
	pub background: &'static str,
	pub box_shadow: &'static str,
	pub backdrop_filter: &'static str,
}

const HEADER_RESTING: HeaderStyle = HeaderStyle {
	background: "rgba(0, 0, 0, 0.95)",
	box_shadow: "0 0 20px rgba(0, 255, 255, 0.3)",
	backdrop_filter: "blur(10px)",
};

const HEADER_SCROLLED: HeaderStyle = HeaderStyle {
	background: "rgba(0, 0, 0, 0.95)",
	box_shadow: "0 2px 20px rgba(0, 255, 255, 0.3)",
	backdrop_filter: "blur(20px)",
};

impl HeaderConfig {
	/// Header styling at vertical scroll offset `scroll_y`.
	pub fn style_at(&self, scroll_y: f64) -> HeaderStyle {
		if scroll_y > self.threshold_px {
			HEADER_SCROLLED
		} else {
			HEADER_RESTING
		}
	}
}

/// Allows one outstanding frame request at a time.
#[derive(Debug, Default)]
pub struct FrameThrottle {
	pending: bool,
}

impl FrameThrottle {
	/// Claim the pending slot. `false` means a frame is already queued.
	pub fn try_schedule(&mut self) -> bool {
		if self.pending {
			return false;
		}
		self.pending = true;
		true
	}

	/// Release the slot once the queued frame has run.
	pub fn complete(&mut self) {
		self.pending = false;
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}
}

/// Passive scroll listener driving the hero parallax.
pub(super) fn install_parallax(window: &Window, config: &ParallaxConfig) -> EventListener {
	let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
	let config = config.clone();

	EventListener::new(window, "scroll", move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		if !throttle.borrow_mut().try_schedule() {
			return;
		}
		let (pending, config) = (throttle.clone(), config.clone());
		let cb = Closure::once_into_js(move || {
			if let Some(window) = web_sys::window() {
				apply_parallax(&window, &config);
			}
			pending.borrow_mut().complete();
		});
		if window.request_animation_frame(cb.unchecked_ref()).is_err() {
			throttle.borrow_mut().complete();
		}
	})
}

fn apply_parallax(window: &Window, config: &ParallaxConfig) {
	let Some(document) = window.document() else {
		return;
	};
	let scrolled = window.page_y_offset().unwrap_or(0.0);
	let viewport_height = window
		.inner_height()
		.ok()
		.and_then(|h| h.as_f64())
		.unwrap_or(0.0);

	let video = query(&document, ".background-video");
	if let Some(media) = video.as_ref().and_then(|v| v.dyn_ref::<HtmlMediaElement>()) {
		media.set_playback_rate(config.video_playback_rate);
		let _ = media.set_attribute("playsinline", "");
		let _ = media.set_attribute("webkit-playsinline", "");
	}

	if let (Some(hero), Some(frame)) = (
		query(&document, ".hero-center"),
		config.hero_frame(scrolled, viewport_height),
	) {
		let transform = format!("translate3d(0, {}px, 0)", frame.translate_y);
		let opacity = frame.opacity.to_string();
		set_styles(&hero, &[("transform", transform.as_str()), ("opacity", opacity.as_str())]);
	}

	if let Some(video) = video {
		set_styles(
			&video,
			&[("transform", "translate3d(0, 0, 0)"), ("position", "fixed")],
		);
	}
}

/// Scroll listener switching the header between resting and scrolled styles.
pub(super) fn install_header(
	window: &Window,
	document: &Document,
	config: &HeaderConfig,
) -> Option<EventListener> {
	let header = query(document, ".header")?;
	let config = config.clone();

	Some(EventListener::new(window, "scroll", move |_| {
		let scroll_y = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.unwrap_or(0.0);
		let style = config.style_at(scroll_y);
		set_styles(
			&header,
			&[
				("background", style.background),
				("box-shadow", style.box_shadow),
				("backdrop-filter", style.backdrop_filter),
			],
		);
	}))
}
