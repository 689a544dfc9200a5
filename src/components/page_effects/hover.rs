//! Pointer hover styling for tool icons, work cards, and the sigma glyph.

use gloo_events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::dom::{query, query_all, query_in, set_styles};

/// Inline styles applied on pointer enter and restored on leave.
struct HoverStyle {
	enter: &'static [(&'static str, &'static str)],
	leave: &'static [(&'static str, &'static str)],
}

static TOOL_ICON: HoverStyle = HoverStyle {
	enter: &[
		("transform", "scale(1.2)"),
		("box-shadow", "0 0 30px rgba(139, 92, 246, 0.8)"),
	],
	leave: &[("transform", "scale(1)"), ("box-shadow", "none")],
};

static WORK_ICON: HoverStyle = HoverStyle {
	enter: &[("transform", "scale(1.1) rotate(5deg)")],
	leave: &[("transform", "scale(1) rotate(0deg)")],
};

static SIGMA_GLOW: HoverStyle = HoverStyle {
	enter: &[(
		"text-shadow",
		"0 0 60px var(--purple-glow), 0 0 120px var(--purple-glow)",
	)],
	leave: &[(
		"text-shadow",
		"0 0 40px var(--purple-glow), 0 0 80px var(--purple-glow)",
	)],
};

/// Wire enter/leave on `trigger` to restyle `target`.
fn hover(trigger: &HtmlElement, target: HtmlElement, style: &'static HoverStyle) -> [EventListener; 2] {
	let leave_target = target.clone();
	[
		EventListener::new(trigger, "mouseenter", move |_| set_styles(&target, style.enter)),
		EventListener::new(trigger, "mouseleave", move |_| {
			set_styles(&leave_target, style.leave)
		}),
	]
}

pub(super) fn install(document: &Document) -> Vec<EventListener> {
	let mut listeners = Vec::new();

	for icon in query_all(document, ".tool-icon") {
		listeners.extend(hover(&icon, icon.clone(), &TOOL_ICON));
	}

	for card in query_all(document, ".work-card") {
		if let Some(icon) = query_in(&card, ".work-icon") {
			listeners.extend(hover(&card, icon, &WORK_ICON));
		}
	}

	if let Some(sigma) = query(document, ".sigma-center") {
		listeners.extend(hover(&sigma, sigma.clone(), &SIGMA_GLOW));
	}

	listeners
}
