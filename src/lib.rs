//! portfolio-fx: ambient visual effects for a static portfolio page.
//!
//! This crate provides WASM components that attach to an already-rendered page:
//! a drifting particle field on a full-viewport canvas, plus scroll reveal,
//! parallax, hover styling, and occasional glitch pulses.

use leptos::prelude::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod dom;
pub mod random;

pub use components::page_effects::PageEffects;
pub use components::particle_field::{ParticleField, ParticleFieldCanvas, ParticleStyle};
pub use config::{EffectsConfig, load_config};
pub use random::RandomSource;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Main application component.
/// Loads effect configuration from the DOM and starts every effect.
#[component]
pub fn App() -> impl IntoView {
	let config = load_config().unwrap_or_default();
	let (canvas_id, particles, resize_debounce_ms) = (
		config.canvas_id.clone(),
		config.particles.clone(),
		config.resize_debounce_ms,
	);

	view! {
		<ParticleFieldCanvas canvas_id=canvas_id particles=particles resize_debounce_ms=resize_debounce_ms />
		<PageEffects config=config />
	}
}
