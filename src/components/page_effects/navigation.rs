//! In-page anchor scrolling and the footer overlay close button.

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{query, query_all, set_styles};

/// Intercept clicks on `a[href^="#"]` and scroll smoothly to the target.
pub(super) fn install_smooth_scroll(document: &Document) -> Vec<EventListener> {
	query_all(document, r##"a[href^="#"]"##)
		.into_iter()
		.map(|anchor| {
			let (document, href) = (document.clone(), anchor.get_attribute("href"));
			EventListener::new_with_options(
				&anchor,
				"click",
				EventListenerOptions::enable_prevent_default(),
				move |event| {
					event.prevent_default();
					let Some(target) = href.as_deref().and_then(|h| query(&document, h)) else {
						return;
					};
					let options = ScrollIntoViewOptions::new();
					options.set_behavior(ScrollBehavior::Smooth);
					options.set_block(ScrollLogicalPosition::Start);
					target.scroll_into_view_with_scroll_into_view_options(&options);
				},
			)
		})
		.collect()
}

/// Hide `.footer-overlay` when `.close-btn` is clicked.
pub(super) fn install_footer_close(document: &Document) -> Option<EventListener> {
	let close = query(document, ".close-btn")?;
	let overlay = query(document, ".footer-overlay")?;

	Some(EventListener::new(&close, "click", move |_| {
		set_styles(&overlay, &[("display", "none")]);
	}))
}
