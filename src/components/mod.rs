//! Leptos components that attach effects to the host page.

pub mod page_effects;
pub mod particle_field;
