//! Injectable randomness for particle seeding and cosmetic glitches.
//!
//! Everything random in the crate draws through [`RandomSource`], so tests can
//! substitute a seeded generator or a fixed script of values.

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
	/// Next uniform sample in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Uniform sample in `[min, max)`.
	fn in_range(&mut self, (min, max): (f64, f64)) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// `true` with probability `p`.
	///
	/// Succeeds when the sample lands strictly above `1 - p`, so `p = 0.3`
	/// fires for samples in `(0.7, 1)`.
	fn chance(&mut self, p: f64) -> bool {
		self.next_f64() > 1.0 - p
	}

	/// Uniform index in `0..len`. `len` must be non-zero.
	fn index(&mut self, len: usize) -> usize {
		((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
	}
}

impl RandomSource for fastrand::Rng {
	fn next_f64(&mut self) -> f64 {
		self.f64()
	}
}

/// Generator seeded from the browser's `Math.random` and clock.
pub fn browser_rng() -> fastrand::Rng {
	let entropy = js_sys::Math::random() * u32::MAX as f64;
	let seed = ((entropy as u64) << 32) ^ js_sys::Date::now() as u64;
	fastrand::Rng::with_seed(seed)
}

#[cfg(test)]
pub(crate) mod testing {
	use super::RandomSource;

	/// Replays a fixed list of samples, cycling when exhausted.
	pub(crate) struct Script {
		values: Vec<f64>,
		pos: usize,
	}

	impl Script {
		pub(crate) fn new(values: &[f64]) -> Self {
			Self {
				values: values.to_vec(),
				pos: 0,
			}
		}
	}

	impl RandomSource for Script {
		fn next_f64(&mut self) -> f64 {
			let v = self.values[self.pos % self.values.len()];
			self.pos += 1;
			v
		}
	}
}

#[cfg(test)]
mod tests {
	use super::testing::Script;
	use super::*;

	#[test]
	fn chance_fires_only_above_threshold() {
		let mut rng = Script::new(&[0.69, 0.71, 0.0, 0.999]);
		assert!(!rng.chance(0.3));
		assert!(rng.chance(0.3));
		assert!(!rng.chance(0.3));
		assert!(rng.chance(0.3));
	}

	#[test]
	fn index_stays_in_bounds() {
		let mut rng = Script::new(&[0.0, 0.5, 0.999_999]);
		assert_eq!(rng.index(4), 0);
		assert_eq!(rng.index(4), 2);
		assert_eq!(rng.index(4), 3);
	}

	#[test]
	fn in_range_maps_unit_interval() {
		let mut rng = Script::new(&[0.0, 0.5]);
		assert_eq!(rng.in_range((0.5, 2.0)), 0.5);
		assert_eq!(rng.in_range((0.5, 2.0)), 1.25);
	}

	#[test]
	fn seeded_generators_repeat() {
		let mut a = fastrand::Rng::with_seed(7);
		let mut b = fastrand::Rng::with_seed(7);
		for _ in 0..16 {
			assert_eq!(a.next_f64(), b.next_f64());
		}
	}
}
