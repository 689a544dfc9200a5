//! Event-driven page effects.
//!
//! Independent handlers wired straight to DOM events, each mutating inline
//! styles or classes on elements already in the page:
//! - Loading-screen fade after `load`
//! - Smooth in-page anchor scrolling and the footer overlay close button
//! - Scroll reveal via `IntersectionObserver`, with occasional glitch pulses
//! - Hero parallax (one pending frame at a time) and header styling on scroll
//! - Hover styling for tool icons, work cards, and the sigma glyph
//! - An ambient ticker that glitches a random heading now and then

mod component;
pub mod glitch;
mod hover;
mod loading;
mod navigation;
pub mod reveal;
pub mod scroll;

pub use component::PageEffects;
pub use glitch::pick_glitch_target;
pub use scroll::{FrameThrottle, HeaderStyle, HeroFrame};
