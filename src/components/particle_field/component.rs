//! Leptos component that animates particles on the page's existing canvas.
//!
//! On mount it looks up the canvas by id, sizes it to the viewport, and starts a
//! `requestAnimationFrame` loop that hands each frame to the [`Animator`]. The
//! running loop is owned by a [`FieldLoop`] stored with the component; when the
//! component is disposed the loop is cancelled and its listeners are removed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animator::{Animator, CancelToken};
use super::debounce::Debouncer;
use super::particles::ParticleField;
use super::render::CanvasSurface;
use super::theme::ParticleStyle;
use crate::dom::viewport_size;
use crate::random::browser_rng;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Animates a drifting particle field on the canvas with id `canvas_id`.
///
/// Renders no markup. If the canvas is missing the component does nothing.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] canvas_id: String,
	#[prop(optional)] particles: ParticleStyle,
	#[prop(default = 250)] resize_debounce_ms: u32,
) -> impl IntoView {
	let running = StoredValue::new_local(None::<FieldLoop>);

	Effect::new(move |_| {
		if running.with_value(Option::is_some) {
			return;
		}
		match FieldLoop::start(&canvas_id, &particles, resize_debounce_ms) {
			Some(field_loop) => running.set_value(Some(field_loop)),
			None => debug!("portfolio-fx: no usable #{canvas_id} canvas, particles disabled"),
		}
	});
}

/// A running frame loop and the listeners feeding it.
struct FieldLoop {
	cancel: CancelToken,
	frame: FrameCallback,
	frame_id: Rc<Cell<Option<i32>>>,
	resize_timer: Rc<RefCell<Option<Timeout>>>,
	_visibility: EventListener,
	_resize: EventListener,
}

impl FieldLoop {
	fn start(canvas_id: &str, style: &ParticleStyle, resize_debounce_ms: u32) -> Option<Self> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let canvas: HtmlCanvasElement = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		let (w, h) = viewport_size(&window)?;
		set_canvas_size(&canvas, w, h);

		let field = ParticleField::new(style, w, h, &mut browser_rng());
		let cancel = CancelToken::new();
		let animator = Rc::new(RefCell::new(Animator::new(field, style.color, cancel.clone())));
		animator.borrow_mut().on_visibility_change(document.hidden());

		let frame: FrameCallback = Rc::new(RefCell::new(None));
		let frame_id = Rc::new(Cell::new(None));
		let (animator_frame, frame_inner, frame_id_inner) =
			(animator.clone(), frame.clone(), frame_id.clone());
		let mut surface = CanvasSurface::new(ctx);
		*frame.borrow_mut() = Some(Closure::new(move || {
			let outcome = animator_frame.borrow_mut().frame(&mut surface);
			if !outcome.reschedules() {
				frame_id_inner.set(None);
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), frame_inner.borrow().as_ref()) {
				frame_id_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *frame.borrow() {
			frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		let animator_vis = animator.clone();
		let visibility = EventListener::new(&document, "visibilitychange", move |_| {
			if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
				animator_vis.borrow_mut().on_visibility_change(doc.hidden());
			}
		});

		let debouncer = Rc::new(RefCell::new(Debouncer::new()));
		let resize_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
		let timer_slot = resize_timer.clone();
		let resize = EventListener::new(&window, "resize", move |_| {
			let Some(size) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			let ticket = debouncer.borrow_mut().push(size);
			let (debouncer, animator, canvas) =
				(debouncer.clone(), animator.clone(), canvas.clone());
			// Replacing the handle clears the previous timeout.
			*timer_slot.borrow_mut() = Some(Timeout::new(resize_debounce_ms, move || {
				if let Some((nw, nh)) = debouncer.borrow_mut().settle(ticket) {
					set_canvas_size(&canvas, nw, nh);
					animator.borrow_mut().resize(nw, nh);
				}
			}));
		});

		info!("portfolio-fx: particle field started ({} particles, {w}x{h})", style.count);

		Some(Self {
			cancel,
			frame,
			frame_id,
			resize_timer,
			_visibility: visibility,
			_resize: resize,
		})
	}
}

impl Drop for FieldLoop {
	fn drop(&mut self) {
		self.cancel.cancel();
		if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// The frame closure holds a clone of `frame`; taking it breaks the cycle.
		self.frame.borrow_mut().take();
		self.resize_timer.borrow_mut().take();
		debug!("portfolio-fx: particle field stopped");
	}
}

fn set_canvas_size(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
}
