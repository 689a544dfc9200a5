//! Effect tuning, optionally overridden from the host page.
//!
//! Defaults reproduce the page's stock behavior. A page can override any subset
//! of fields with a JSON script element:
//!
//! ```html
//! <script id="fx-config" type="application/json">
//!   { "particles": { "count": 40 }, "glitch": { "probability": 0.05 } }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::particle_field::ParticleStyle;

/// Id of the script element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Loading-screen timings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
	/// Id of the loading-screen element.
	pub element_id: String,
	/// Delay after page load before the screen fades (class `hidden`).
	pub hide_delay_ms: u32,
	/// Further delay before the screen is taken out of layout.
	pub remove_delay_ms: u32,
}

impl Default for LoadingConfig {
	fn default() -> Self {
		Self {
			element_id: "loadingScreen".into(),
			hide_delay_ms: 2000,
			remove_delay_ms: 500,
		}
	}
}

/// Scroll-reveal observer settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	/// Fraction of an element that must be visible to reveal it.
	pub threshold: f64,
	/// Observer root margin (CSS margin syntax).
	pub root_margin: String,
	/// Chance of a glitch pulse on reveal.
	pub glitch_probability: f64,
	/// How long the reveal glitch class stays on.
	pub glitch_ms: u32,
	/// Delay before the card layout pass runs.
	pub settle_delay_ms: u32,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px 0px -50px 0px".into(),
			glitch_probability: 0.3,
			glitch_ms: 300,
			settle_delay_ms: 100,
		}
	}
}

/// Hero parallax factors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
	/// Hero vertical offset per pixel scrolled.
	pub offset_factor: f64,
	/// Opacity lost over one viewport height of scrolling.
	pub fade_factor: f64,
	/// Playback rate applied to the background video.
	pub video_playback_rate: f64,
}

impl Default for ParallaxConfig {
	fn default() -> Self {
		Self {
			offset_factor: 0.15,
			fade_factor: 0.4,
			video_playback_rate: 0.95,
		}
	}
}

/// Header scroll styling.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
	/// Scroll offset past which the header switches to its scrolled style.
	pub threshold_px: f64,
}

impl Default for HeaderConfig {
	fn default() -> Self {
		Self { threshold_px: 50.0 }
	}
}

/// Ambient glitch ticker.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
	/// Tick period.
	pub interval_ms: u32,
	/// Chance per tick that a heading glitches.
	pub probability: f64,
	/// How long the glitch class stays on.
	pub duration_ms: u32,
}

impl Default for GlitchConfig {
	fn default() -> Self {
		Self {
			interval_ms: 8000,
			probability: 0.02,
			duration_ms: 200,
		}
	}
}

/// Complete effect configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
	/// Id of the particle canvas.
	pub canvas_id: String,
	pub particles: ParticleStyle,
	/// Quiet window before a viewport resize reaches the canvas.
	pub resize_debounce_ms: u32,
	pub loading: LoadingConfig,
	pub reveal: RevealConfig,
	pub parallax: ParallaxConfig,
	pub header: HeaderConfig,
	pub glitch: GlitchConfig,
}

impl Default for EffectsConfig {
	fn default() -> Self {
		Self {
			canvas_id: "particleCanvas".into(),
			particles: ParticleStyle::default(),
			resize_debounce_ms: 250,
			loading: LoadingConfig::default(),
			reveal: RevealConfig::default(),
			parallax: ParallaxConfig::default(),
			header: HeaderConfig::default(),
			glitch: GlitchConfig::default(),
		}
	}
}

impl EffectsConfig {
	/// Parse JSON overrides on top of the defaults.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

/// Load overrides from the `#fx-config` script element.
///
/// Returns `None` when the element is absent or its JSON does not parse.
pub fn load_config() -> Option<EffectsConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match EffectsConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-fx: loaded overrides from #{CONFIG_ELEMENT_ID}");
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse #{CONFIG_ELEMENT_ID}: {}", e);
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::Color;

	#[test]
	fn defaults_match_stock_page() {
		let c = EffectsConfig::default();
		assert_eq!(c.canvas_id, "particleCanvas");
		assert_eq!(c.resize_debounce_ms, 250);
		assert_eq!(c.particles.count, 25);
		assert_eq!(c.particles.color, Color::rgb(0, 255, 255));
		assert_eq!(c.loading.hide_delay_ms, 2000);
		assert_eq!(c.loading.remove_delay_ms, 500);
		assert_eq!(c.reveal.threshold, 0.1);
		assert_eq!(c.reveal.glitch_ms, 300);
		assert_eq!(c.header.threshold_px, 50.0);
		assert_eq!(c.glitch.interval_ms, 8000);
		assert_eq!(c.glitch.probability, 0.02);
	}

	#[test]
	fn empty_object_is_all_defaults() {
		assert_eq!(EffectsConfig::from_json("{}").unwrap(), EffectsConfig::default());
	}

	#[test]
	fn partial_json_overrides_only_named_fields() {
		let c = EffectsConfig::from_json(
			r#"{
				"particles": { "count": 40, "opacity": [0.1, 0.9] },
				"glitch": { "probability": 0.5 }
			}"#,
		)
		.unwrap();

		assert_eq!(c.particles.count, 40);
		assert_eq!(c.particles.opacity, (0.1, 0.9));
		assert_eq!(c.particles.radius, (0.5, 2.0));
		assert_eq!(c.glitch.probability, 0.5);
		assert_eq!(c.glitch.interval_ms, 8000);
		assert_eq!(c.reveal, RevealConfig::default());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(EffectsConfig::from_json(r#"{ "particles": { "count": "many" } }"#).is_err());
	}
}
