//! Ambient particle simulation.

use super::theme::ParticleStyle;
use crate::random::RandomSource;

/// A single drifting particle.
///
/// Only the position changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
	radius: f64,
	opacity: f64,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, opacity: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius,
			opacity,
		}
	}

	fn random(style: &ParticleStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let speed = (-style.max_speed, style.max_speed);
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			radius: rng.in_range(style.radius),
			vx: rng.in_range(speed),
			vy: rng.in_range(speed),
			opacity: rng.in_range(style.opacity),
		}
	}

	pub fn x(&self) -> f64 {
		self.x
	}

	pub fn y(&self) -> f64 {
		self.y
	}

	pub fn velocity(&self) -> (f64, f64) {
		(self.vx, self.vy)
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	pub fn opacity(&self) -> f64 {
		self.opacity
	}

	fn advance(&mut self, width: f64, height: f64) {
		self.x = wrap(self.x + self.vx, width);
		self.y = wrap(self.y + self.vy, height);
	}
}

/// Hard reset at the edges: past the far edge goes to 0, below 0 goes to the extent.
fn wrap(v: f64, extent: f64) -> f64 {
	if v > extent {
		0.0
	} else if v < 0.0 {
		extent
	} else {
		v
	}
}

/// Fixed-size set of particles over a `width` x `height` surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Scatter `style.count` particles uniformly over the surface.
	pub fn new(style: &ParticleStyle, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::random(style, width, height, rng))
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a field from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Advance every particle by one frame of velocity and wrap at the edges.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// Change the surface bounds.
	///
	/// Positions are left as they are; anything now past the far edge resets
	/// on the next step.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::random::testing::Script;

	fn single(p: Particle) -> ParticleField {
		ParticleField::from_particles(vec![p], 800.0, 600.0)
	}

	#[test]
	fn creates_exactly_count_particles() {
		let mut rng = Script::new(&[0.1, 0.4, 0.9]);
		let field = ParticleField::new(&ParticleStyle::default(), 800.0, 600.0, &mut rng);
		assert_eq!(field.len(), 25);
	}

	#[test]
	fn extreme_samples_stay_in_range() {
		let style = ParticleStyle::default();
		for sample in [0.0, 0.999_999] {
			let mut rng = Script::new(&[sample]);
			let field = ParticleField::new(&style, 800.0, 600.0, &mut rng);
			for p in field.particles() {
				assert!((0.0..800.0).contains(&p.x()));
				assert!((0.0..600.0).contains(&p.y()));
				assert!((0.5..=2.0).contains(&p.radius()));
				assert!((0.2..=0.5).contains(&p.opacity()));
				let (vx, vy) = p.velocity();
				assert!((-0.15..0.15).contains(&vx));
				assert!((-0.15..0.15).contains(&vy));
			}
		}
	}

	#[test]
	fn crossing_far_edge_resets_to_zero() {
		let mut field = single(Particle::new(800.0 - 0.01, 10.0, 0.1, 0.0, 1.0, 0.3));
		field.step();
		assert_eq!(field.particles()[0].x(), 0.0);
		assert_eq!(field.particles()[0].y(), 10.0);
	}

	#[test]
	fn crossing_zero_resets_to_extent() {
		let mut field = single(Particle::new(5.0, 0.05, 0.0, -0.1, 1.0, 0.3));
		field.step();
		assert_eq!(field.particles()[0].y(), 600.0);
	}

	#[test]
	fn interior_motion_is_plain_addition() {
		let mut field = single(Particle::new(100.0, 200.0, 0.125, -0.125, 1.0, 0.3));
		field.step();
		field.step();
		let p = &field.particles()[0];
		assert_eq!((p.x(), p.y()), (100.25, 199.75));
	}

	#[test]
	fn resize_keeps_positions_and_count() {
		let mut rng = Script::new(&[0.9]);
		let mut field = ParticleField::new(&ParticleStyle::default(), 800.0, 600.0, &mut rng);
		let before = field.particles().to_vec();
		field.resize(400.0, 300.0);
		assert_eq!(field.particles(), &before[..]);
		assert_eq!(field.size(), (400.0, 300.0));
	}

	#[test]
	fn shrink_is_corrected_on_next_step() {
		let mut field = single(Particle::new(700.0, 500.0, 0.1, 0.1, 1.0, 0.3));
		field.resize(400.0, 300.0);
		field.step();
		let p = &field.particles()[0];
		assert_eq!((p.x(), p.y()), (0.0, 0.0));
	}
}
