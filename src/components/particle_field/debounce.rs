//! Trailing-edge debouncing for viewport resizes.

/// Keeps only the most recent value pushed within a quiet window.
///
/// Each [`push`](Debouncer::push) returns a ticket for the timer armed with it.
/// When a timer fires it calls [`settle`](Debouncer::settle) with its ticket;
/// only the latest ticket yields the value, so a burst of pushes produces a
/// single action carrying the last value.
#[derive(Debug)]
pub struct Debouncer<T> {
	latest: Option<T>,
	ticket: u64,
}

impl<T> Default for Debouncer<T> {
	fn default() -> Self {
		Self {
			latest: None,
			ticket: 0,
		}
	}
}

impl<T> Debouncer<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a new value and return the ticket the caller's timer must present.
	pub fn push(&mut self, value: T) -> u64 {
		self.ticket += 1;
		self.latest = Some(value);
		self.ticket
	}

	/// Take the pending value if `ticket` is still the most recent one.
	pub fn settle(&mut self, ticket: u64) -> Option<T> {
		if ticket == self.ticket {
			self.latest.take()
		} else {
			None
		}
	}

	pub fn is_pending(&self) -> bool {
		self.latest.is_some()
	}
}
