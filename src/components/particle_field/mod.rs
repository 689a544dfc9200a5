//! Ambient particle field drawn behind the page.
//!
//! A fixed set of particles drifts at constant velocity across a full-viewport
//! canvas, wrapping at the edges:
//! - Positions advance once per display refresh via `requestAnimationFrame`
//! - Frames are skipped (but still scheduled) while the page is hidden
//! - Window resizes are debounced before the canvas is resized
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{ParticleFieldCanvas, ParticleStyle};
//!
//! view! { <ParticleFieldCanvas canvas_id="particleCanvas" particles=ParticleStyle::default() /> }
//! ```

mod animator;
mod component;
mod debounce;
mod particles;
mod render;
pub mod theme;

pub use animator::{Animator, CancelToken, FrameOutcome, Surface};
pub use component::ParticleFieldCanvas;
pub use debounce::Debouncer;
pub use particles::{Particle, ParticleField};
pub use theme::{Color, ParticleStyle};
