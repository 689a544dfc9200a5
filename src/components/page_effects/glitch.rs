//! Random "glitch" class pulses on headings.

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::Document;

use crate::config::GlitchConfig;
use crate::dom::{pulse_class, query_all};
use crate::random::{RandomSource, browser_rng};

/// Class toggled for the glitch animation.
pub const GLITCH_CLASS: &str = "glitch";

/// Elements eligible for the ambient ticker.
const HEADING_SELECTOR: &str = ".hero-name, .section-title";

/// Pick which of `count` candidates glitches this tick, if any.
///
/// Nothing is drawn from `rng` when there are no candidates; otherwise one
/// sample decides whether to fire and a second picks the index.
pub fn pick_glitch_target(
	rng: &mut impl RandomSource,
	probability: f64,
	count: usize,
) -> Option<usize> {
	if count == 0 || !rng.chance(probability) {
		return None;
	}
	Some(rng.index(count))
}

/// Start the periodic heading glitch. Dropping the interval stops it.
pub(super) fn start_ticker(document: &Document, config: &GlitchConfig) -> Interval {
	let document = document.clone();
	let (probability, duration_ms) = (config.probability, config.duration_ms);
	let mut rng = browser_rng();

	Interval::new(config.interval_ms, move || {
		let headings = query_all(&document, HEADING_SELECTOR);
		if let Some(i) = pick_glitch_target(&mut rng, probability, headings.len()) {
			debug!("portfolio-fx: ambient glitch on heading {i}");
			pulse_class(&headings[i], GLITCH_CLASS, duration_ms);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::testing::Script;

	#[test]
	fn no_candidates_never_fires() {
		let mut rng = Script::new(&[0.999]);
		assert_eq!(pick_glitch_target(&mut rng, 1.0, 0), None);
	}

	#[test]
	fn low_roll_skips_the_tick() {
		let mut rng = Script::new(&[0.5, 0.0]);
		assert_eq!(pick_glitch_target(&mut rng, 0.02, 3), None);
	}

	#[test]
	fn high_roll_picks_by_second_sample() {
		let mut rng = Script::new(&[0.99, 0.7]);
		assert_eq!(pick_glitch_target(&mut rng, 0.02, 3), Some(2));
	}

	#[test]
	fn seeded_ticks_are_reproducible() {
		let run = || {
			let mut rng = fastrand::Rng::with_seed(42);
			(0..200)
				.map(|_| pick_glitch_target(&mut rng, 0.3, 4))
				.collect::<Vec<_>>()
		};
		let picks = run();
		assert_eq!(picks, run());
		assert!(picks.iter().flatten().all(|&i| i < 4));
	}
}
