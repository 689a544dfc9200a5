//! Loading-screen fade-out.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::LoadingConfig;
use crate::dom::{after, set_styles, when_loaded};

/// Hides the loading screen a fixed time after page load, then removes it
/// from layout. Dropping it cancels a fade that has not started yet.
pub(super) struct LoadingScreen {
	_load: Option<EventListener>,
	_hide: Rc<RefCell<Option<Timeout>>>,
}

impl LoadingScreen {
	pub(super) fn install(
		window: &Window,
		document: &Document,
		config: &LoadingConfig,
	) -> Option<Self> {
		let Some(screen) = document
			.get_element_by_id(&config.element_id)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			debug!("portfolio-fx: no #{} element, skipping loading screen", config.element_id);
			return None;
		};

		let hide = Rc::new(RefCell::new(None));
		let (slot, hide_delay, remove_delay) =
			(hide.clone(), config.hide_delay_ms, config.remove_delay_ms);
		let load = when_loaded(window, document, move || {
			*slot.borrow_mut() = Some(Timeout::new(hide_delay, move || {
				let _ = screen.class_list().add_1("hidden");
				after(remove_delay, move || set_styles(&screen, &[("display", "none")]));
			}));
		});

		Some(Self {
			_load: load,
			_hide: hide,
		})
	}
}
