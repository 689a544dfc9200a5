//! Property-based invariant tests for the particle field simulation.
//!
//! Verifies:
//! 1. Seeded fields start with every value inside its configured range
//! 2. Coordinates stay within the surface after any number of steps
//! 3. Particle count never changes across steps and resizes
//! 4. Velocity, radius, and opacity never change
//! 5. Same seed, same field
//! 6. End-to-end: 800x600 with stock settings

use portfolio_fx::components::particle_field::{
	Animator, CancelToken, Color, FrameOutcome, ParticleField, ParticleStyle, Surface,
};
use proptest::prelude::*;

struct Sink {
	circles: usize,
}

impl Surface for Sink {
	fn clear(&mut self, _: f64, _: f64) {}

	fn fill_circle(&mut self, _: f64, _: f64, _: f64, _: Color) {
		self.circles += 1;
	}
}

fn seeded(seed: u64, width: f64, height: f64) -> ParticleField {
	let mut rng = fastrand::Rng::with_seed(seed);
	ParticleField::new(&ParticleStyle::default(), width, height, &mut rng)
}

fn in_bounds(field: &ParticleField) -> bool {
	let (w, h) = field.size();
	field
		.particles()
		.iter()
		.all(|p| (0.0..=w).contains(&p.x()) && (0.0..=h).contains(&p.y()))
}

// ── 1. Initial ranges ────────────────────────────────────────────────

proptest! {
	#[test]
	fn seeded_initial_values_in_range(
		seed in any::<u64>(),
		width in 1.0f64..4000.0,
		height in 1.0f64..4000.0,
	) {
		let field = seeded(seed, width, height);
		prop_assert_eq!(field.len(), 25);
		for p in field.particles() {
			prop_assert!(p.x() >= 0.0 && p.x() < width);
			prop_assert!(p.y() >= 0.0 && p.y() < height);
			prop_assert!((0.5..=2.0).contains(&p.radius()));
			prop_assert!((0.2..=0.5).contains(&p.opacity()));
			let (vx, vy) = p.velocity();
			prop_assert!((-0.15..=0.15).contains(&vx));
			prop_assert!((-0.15..=0.15).contains(&vy));
		}
	}
}

// ── 2 & 3 & 4. Stepping and resizing ─────────────────────────────────

proptest! {
	#[test]
	fn stepping_keeps_particles_on_surface(
		seed in any::<u64>(),
		width in 10.0f64..2000.0,
		height in 10.0f64..2000.0,
		steps in 1usize..2000,
	) {
		let mut field = seeded(seed, width, height);
		for _ in 0..steps {
			field.step();
		}
		prop_assert!(in_bounds(&field));
		prop_assert_eq!(field.len(), 25);
	}

	#[test]
	fn resizes_never_change_cardinality(
		seed in any::<u64>(),
		sizes in prop::collection::vec((10.0f64..2000.0, 10.0f64..2000.0), 1..20),
	) {
		let mut field = seeded(seed, 800.0, 600.0);
		let before: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.velocity(), p.radius(), p.opacity()))
			.collect();

		for (w, h) in sizes {
			field.resize(w, h);
			field.step();
			prop_assert_eq!(field.len(), 25);
			prop_assert!(in_bounds(&field));
		}

		let after: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.velocity(), p.radius(), p.opacity()))
			.collect();
		prop_assert_eq!(before, after);
	}
}

// ── 5. Determinism ───────────────────────────────────────────────────

proptest! {
	#[test]
	fn same_seed_same_field(seed in any::<u64>()) {
		let a = seeded(seed, 800.0, 600.0);
		let b = seeded(seed, 800.0, 600.0);
		prop_assert_eq!(a.particles(), b.particles());
	}
}

// ── 6. End-to-end ────────────────────────────────────────────────────

#[test]
fn stock_field_on_800_by_600() {
	let field = seeded(0x5eed, 800.0, 600.0);
	assert_eq!(field.len(), 25);
	for p in field.particles() {
		assert!((0.0..800.0).contains(&p.x()));
		assert!((0.0..600.0).contains(&p.y()));
		assert!((0.5..=2.0).contains(&p.radius()));
		assert!((0.2..=0.5).contains(&p.opacity()));
	}

	let cancel = CancelToken::new();
	let mut animator = Animator::new(field, Color::rgb(0, 255, 255), cancel.clone());
	let mut sink = Sink { circles: 0 };
	for _ in 0..120 {
		assert_eq!(animator.frame(&mut sink), FrameOutcome::Drawn);
	}
	assert_eq!(sink.circles, 25 * 120);

	cancel.cancel();
	assert!(!animator.frame(&mut sink).reschedules());
	assert_eq!(sink.circles, 25 * 120);
}
