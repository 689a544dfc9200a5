//! Scroll-triggered reveal animations.
//!
//! Sections start hidden and are revealed by an `IntersectionObserver` when
//! they enter the viewport, occasionally with a glitch pulse. A short delay
//! after DOM ready, project and education cards are laid out with alternating
//! slide-in classes and handed to the same observer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::glitch::GLITCH_CLASS;
use crate::config::RevealConfig;
use crate::dom::{after, pulse_class, query, query_all, set_styles, when_ready};
use crate::random::{RandomSource, browser_rng};

/// Class marking an element that has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Sections that fade up from below when first seen.
const ANIMATED: &str = ".work-card, .skills-visualization, .contact";
/// Items that get alternating slide-in classes once the page settles.
const SLIDE_ITEMS: &str = ".project-item, .work-card, .education-card, .upcoming-project-item";
/// Cards that get the 3-D hover treatment.
const CARDS: &str = ".work-card, .project-item, .education-card";

/// Slide-in class for the `index`-th item: even from the left, odd from the right.
pub fn slide_class(index: usize) -> &'static str {
	if index % 2 == 0 {
		"fade-in-left"
	} else {
		"fade-in-right"
	}
}

/// When the `index`-th tool icon is revealed, in milliseconds after DOM ready.
pub fn tool_intro_delay_ms(index: usize) -> u32 {
	500 + index as u32 * 100
}

/// CSS transition for the `index`-th tool icon, staggered by 100 ms per icon.
pub fn tool_intro_transition(index: usize) -> String {
	let delay = index * 100;
	format!("opacity 0.5s ease {delay}ms, transform 0.5s ease {delay}ms")
}

/// An `IntersectionObserver` plus the closure it calls. Disconnects on drop.
struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
	fn new(config: &RevealConfig) -> Option<Self> {
		let (probability, glitch_ms) = (config.glitch_probability, config.glitch_ms);
		let mut rng = browser_rng();
		let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
			move |entries: Array, _: IntersectionObserver| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					let _ = target.class_list().add_1(VISIBLE_CLASS);
					if rng.chance(probability) {
						pulse_class(&target, GLITCH_CLASS, glitch_ms);
					}
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(config.threshold));
		options.set_root_margin(&config.root_margin);
		let observer =
			match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
				Ok(observer) => observer,
				Err(e) => {
					warn!("portfolio-fx: IntersectionObserver unavailable: {:?}", e);
					return None;
				}
			};

		Some(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Installed reveal machinery. Dropping it stops observing and cancels the
/// pending card layout pass.
pub(super) struct Reveal {
	_observer: RevealObserver,
	_ready: Option<EventListener>,
	_settle: Rc<RefCell<Option<Timeout>>>,
}

impl Reveal {
	pub(super) fn install(document: &Document, config: &RevealConfig) -> Option<Self> {
		let observer = RevealObserver::new(config)?;
		let settle = Rc::new(RefCell::new(None));

		let (doc, obs, slot, delay) = (
			document.clone(),
			observer.observer.clone(),
			settle.clone(),
			config.settle_delay_ms,
		);
		let ready = when_ready(document, move || {
			prepare_sections(&doc, &obs);
			intro_tool_icons(&doc);
			*slot.borrow_mut() = Some(Timeout::new(delay, move || settle_cards(&doc, &obs)));
		});

		Some(Self {
			_observer: observer,
			_ready: ready,
			_settle: settle,
		})
	}
}

fn prepare_sections(document: &Document, observer: &IntersectionObserver) {
	let sections = query_all(document, ANIMATED);
	debug!("portfolio-fx: observing {} sections", sections.len());
	for el in &sections {
		set_styles(
			el,
			&[
				("opacity", "0"),
				("transform", "translateY(30px)"),
				("transition", "opacity 0.6s ease, transform 0.6s ease"),
			],
		);
		observer.observe(el);
	}
}

fn intro_tool_icons(document: &Document) {
	for (i, icon) in query_all(document, ".tool-icon").into_iter().enumerate() {
		let transition = tool_intro_transition(i);
		set_styles(
			&icon,
			&[
				("opacity", "0"),
				("transform", "scale(0)"),
				("transition", transition.as_str()),
			],
		);
		after(tool_intro_delay_ms(i), move || {
			set_styles(&icon, &[("opacity", "1"), ("transform", "scale(1)")]);
		});
	}
}

fn settle_cards(document: &Document, observer: &IntersectionObserver) {
	for (i, el) in query_all(document, SLIDE_ITEMS).iter().enumerate() {
		set_styles(el, &[("opacity", "1"), ("transform", "translateY(0)")]);
		let _ = el.class_list().add_1(slide_class(i));
		observer.observe(el);
	}

	if let Some(contact) = query(document, ".contact") {
		set_styles(
			&contact,
			&[
				("opacity", "1"),
				("transform", "translateY(0)"),
				("visibility", "visible"),
				("display", "block"),
			],
		);
	}

	for card in query_all(document, CARDS) {
		let _ = card.class_list().add_2("card-3d", "transform-3d");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slide_classes_alternate_from_the_left() {
		let classes: Vec<_> = (0..4).map(slide_class).collect();
		assert_eq!(
			classes,
			["fade-in-left", "fade-in-right", "fade-in-left", "fade-in-right"]
		);
	}

	#[test]
	fn tool_icons_are_staggered_by_100ms() {
		assert_eq!(tool_intro_delay_ms(0), 500);
		assert_eq!(tool_intro_delay_ms(3), 800);
	}

	#[test]
	fn tool_transition_delay_matches_index() {
		assert_eq!(
			tool_intro_transition(0),
			"opacity 0.5s ease 0ms, transform 0.5s ease 0ms"
		);
		assert_eq!(
			tool_intro_transition(2),
			"opacity 0.5s ease 200ms, transform 0.5s ease 200ms"
		);
	}
}
