//! Leptos component that wires the page's scroll, hover, and timer effects.

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use log::info;
use web_sys::Window;

use super::loading::LoadingScreen;
use super::reveal::Reveal;
use super::{glitch, hover, navigation, scroll};
use crate::config::EffectsConfig;

/// Installs every page effect against the host document.
///
/// Renders no markup. Effects whose target elements are missing are skipped.
#[component]
pub fn PageEffects(#[prop(optional)] config: EffectsConfig) -> impl IntoView {
	let installed = StoredValue::new_local(None::<EffectHandles>);

	Effect::new(move |_| {
		if installed.with_value(Option::is_some) {
			return;
		}
		if let Some(handles) = EffectHandles::install(&config) {
			installed.set_value(Some(handles));
		}
	});
}

/// Everything the page effects keep alive. Dropping it removes every listener
/// and stops every timer.
struct EffectHandles {
	_listeners: Vec<EventListener>,
	_loading: Option<LoadingScreen>,
	_reveal: Option<Reveal>,
	_ticker: Interval,
}

impl EffectHandles {
	fn install(config: &EffectsConfig) -> Option<Self> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;

		let loading = LoadingScreen::install(&window, &document, &config.loading);
		let reveal = Reveal::install(&document, &config.reveal);

		let mut listeners = navigation::install_smooth_scroll(&document);
		listeners.extend(navigation::install_footer_close(&document));
		listeners.push(scroll::install_parallax(&window, &config.parallax));
		listeners.extend(scroll::install_header(&window, &document, &config.header));
		listeners.extend(hover::install(&document));

		let ticker = glitch::start_ticker(&document, &config.glitch);

		info!(
			"portfolio-fx: page effects installed ({} listeners, loading screen: {}, reveal: {})",
			listeners.len(),
			loading.is_some(),
			reveal.is_some()
		);

		Some(Self {
			_listeners: listeners,
			_loading: loading,
			_reveal: reveal,
			_ticker: ticker,
		})
	}
}
