//! Per-frame driver for the particle field.
//!
//! The [`Animator`] owns the field plus the flags the frame loop consults:
//! page visibility and a [`CancelToken`]. Drawing goes through [`Surface`] so
//! the frame logic runs without a browser.

use std::cell::Cell;
use std::rc::Rc;

use super::particles::ParticleField;
use super::theme::Color;

/// Drawing primitives the animator needs from a 2-D surface.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centred at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}

/// Shared stop flag for a frame loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// What a single frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// Particles advanced and the surface was redrawn.
	Drawn,
	/// Page hidden; nothing moved or drew.
	Suspended,
	/// The loop was cancelled.
	Cancelled,
}

impl FrameOutcome {
	/// Whether the loop should request another frame.
	pub fn reschedules(self) -> bool {
		self != FrameOutcome::Cancelled
	}
}

pub struct Animator {
	field: ParticleField,
	color: Color,
	visible: bool,
	cancel: CancelToken,
}

impl Animator {
	pub fn new(field: ParticleField, color: Color, cancel: CancelToken) -> Self {
		Self {
			field,
			color,
			visible: true,
			cancel,
		}
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Visibility-change hook: `hidden` mirrors `document.hidden`.
	pub fn on_visibility_change(&mut self, hidden: bool) {
		self.visible = !hidden;
	}

	/// Surface-resize hook.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.field.resize(width, height);
	}

	/// Run one frame: step all particles, clear, then draw each one.
	pub fn frame(&mut self, surface: &mut impl Surface) -> FrameOutcome {
		if self.cancel.is_cancelled() {
			return FrameOutcome::Cancelled;
		}
		if !self.visible {
			return FrameOutcome::Suspended;
		}

		self.field.step();

		let (w, h) = self.field.size();
		surface.clear(w, h);
		for p in self.field.particles() {
			surface.fill_circle(p.x(), p.y(), p.radius(), self.color.with_alpha(p.opacity()));
		}
		FrameOutcome::Drawn
	}
}
