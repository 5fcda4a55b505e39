//! Auto-incrementing sequence counters.
//!
//! Every factory invocation draws exactly one value from a [`Sequence`].
//! By default all factories share the process-wide counter returned by
//! [`Sequence::global`], so values stay unique across a whole lineage of
//! extended factories. Tests that need deterministic numbering can inject an
//! isolated counter or reset the global one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::attribute::Attribute;

/// Process-wide counter shared by every factory that was not given its own.
static GLOBAL_SEQUENCE: Lazy<Arc<Sequence>> = Lazy::new(|| Arc::new(Sequence::new()));

/// Monotonic counter handing out one value per factory invocation.
///
/// The increment is a single fetch-and-add, so concurrent invocations never
/// observe the same value and no value is skipped.
///
/// # Example
///
/// ```
/// use reinhardt_factory::Sequence;
///
/// let seq = Sequence::new();
/// assert_eq!(seq.next(), 1);
/// assert_eq!(seq.next(), 2);
/// assert_eq!(seq.current(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Sequence {
	last: AtomicU64,
}

impl Sequence {
	/// Creates an isolated counter whose first value is 1.
	pub fn new() -> Self {
		Self {
			last: AtomicU64::new(0),
		}
	}

	/// Creates an isolated counter whose first value is `start`.
	///
	/// A `start` of 0 is clamped to 1, the smallest value a counter hands out.
	pub fn starting_at(start: u64) -> Self {
		Self {
			last: AtomicU64::new(start.saturating_sub(1)),
		}
	}

	/// Returns the process-wide shared counter.
	pub fn global() -> Arc<Sequence> {
		Arc::clone(&GLOBAL_SEQUENCE)
	}

	/// Advances the counter and returns the new value.
	pub fn next(&self) -> u64 {
		self.last.fetch_add(1, Ordering::SeqCst) + 1
	}

	/// Returns the last value handed out, or 0 if none was.
	pub fn current(&self) -> u64 {
		self.last.load(Ordering::SeqCst)
	}

	/// Resets the counter so the next value is 1.
	pub fn reset(&self) {
		self.reset_to(1);
	}

	/// Resets the counter so the next value is `next`.
	///
	/// A `next` of 0 is clamped to 1.
	pub fn reset_to(&self, next: u64) {
		tracing::debug!(next, "resetting sequence counter");
		self.last.store(next.saturating_sub(1), Ordering::SeqCst);
	}
}

/// Advances the global counter and returns the new value.
pub fn next_sequence() -> u64 {
	GLOBAL_SEQUENCE.next()
}

/// Resets the global counter so the next value is 1.
///
/// Intended for test setup; tests sharing the global counter should run
/// serially.
pub fn reset_sequence() {
	GLOBAL_SEQUENCE.reset();
}

/// Returns the identity generator: the attribute resolves to the sequence
/// number of the invocation.
///
/// # Example
///
/// ```
/// use reinhardt_factory::{define_with_sequence, sequence, Sequence, Template};
/// use std::sync::Arc;
///
/// let model = define_with_sequence(
/// 	Template::new().attr("id", sequence()),
/// 	Arc::new(Sequence::new()),
/// );
/// assert_eq!(model.build()["id"], 1);
/// assert_eq!(model.build()["id"], 2);
/// ```
pub fn sequence() -> Attribute {
	Attribute::generator(Value::from)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::thread;

	#[rstest]
	fn test_sequence_starts_at_one() {
		let seq = Sequence::new();
		assert_eq!(seq.current(), 0);
		assert_eq!(seq.next(), 1);
		assert_eq!(seq.next(), 2);
		assert_eq!(seq.next(), 3);
	}

	#[rstest]
	#[case(1, 1)]
	#[case(100, 100)]
	fn test_sequence_starting_at(#[case] start: u64, #[case] expected_first: u64) {
		let seq = Sequence::starting_at(start);
		assert_eq!(seq.next(), expected_first);
		assert_eq!(seq.next(), expected_first + 1);
	}

	#[rstest]
	fn test_sequence_starting_at_zero_is_clamped_to_one() {
		// Arrange
		let seq = Sequence::starting_at(0);

		// Act
		let first = seq.next();

		// Assert
		assert_eq!(seq.current(), 1);
		assert_eq!(first, 1);
	}

	#[rstest]
	fn test_sequence_reset() {
		// Arrange
		let seq = Sequence::new();
		seq.next();
		seq.next();

		// Act
		seq.reset();

		// Assert
		assert_eq!(seq.current(), 0);
		assert_eq!(seq.next(), 1);
	}

	#[rstest]
	fn test_sequence_reset_to() {
		let seq = Sequence::new();
		seq.reset_to(42);
		assert_eq!(seq.next(), 42);
		assert_eq!(seq.current(), 42);
	}

	#[rstest]
	fn test_sequence_concurrent_next_has_no_gaps_or_duplicates() {
		// Arrange
		let seq = Arc::new(Sequence::new());

		// Act
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let seq = Arc::clone(&seq);
				thread::spawn(move || (0..250).map(|_| seq.next()).collect::<Vec<_>>())
			})
			.collect();
		let mut values: Vec<u64> = handles
			.into_iter()
			.flat_map(|handle| handle.join().unwrap())
			.collect();
		values.sort_unstable();

		// Assert
		assert_eq!(values, (1..=2000).collect::<Vec<_>>());
	}

	#[rstest]
	fn test_global_returns_shared_counter() {
		assert!(Arc::ptr_eq(&Sequence::global(), &Sequence::global()));
	}

	#[rstest]
	fn test_sequence_attribute_is_identity() {
		let attr = sequence();
		assert_eq!(attr.resolve(7), Value::from(7u64));
		assert_eq!(attr.resolve(8), Value::from(8u64));
	}
}
