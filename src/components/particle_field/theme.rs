//! Visual styling for the particle field.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Ambient particle configuration.
///
/// Ranges are half-open `(min, max)` pairs sampled uniformly per particle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles, fixed for the lifetime of the field
	pub count: usize,
	/// Particle color; alpha comes from each particle's opacity
	pub color: Color,
	/// Radius range
	pub radius: (f64, f64),
	/// Per-axis speed bound in units per frame; velocity is drawn from `[-max_speed, max_speed)`
	pub max_speed: f64,
	/// Opacity range
	pub opacity: (f64, f64),
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 25,
			color: Color::rgb(0, 255, 255),
			radius: (0.5, 2.0),
			max_speed: 0.15,
			opacity: (0.2, 0.5),
		}
	}
}
