//! Policy number draws
//!
//! Numbers are drawn uniformly from `[0, MAX_POLICY_NUMBER)`. The draw is
//! behind `NumberSource` so the collision loop in `PolicyService` can be
//! driven deterministically.

use fake::Fake;

/// Exclusive upper bound of policy numbers
pub const MAX_POLICY_NUMBER: i32 = 100_000;

/// Source of candidate policy numbers
pub trait NumberSource: Send + Sync {
    /// Draws one candidate in `[0, MAX_POLICY_NUMBER)`
    fn draw(&self) -> i32;
}

/// Uniform random draws using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeNumberSource;

impl NumberSource for FakeNumberSource {
    fn draw(&self) -> i32 {
        (0..MAX_POLICY_NUMBER).fake::<i32>()
    }
}

/// Replays a fixed sequence of draws, wrapping around at the end
#[cfg(any(test, feature = "mock"))]
#[derive(Debug)]
pub struct SequenceNumberSource {
    values: Vec<i32>,
    next: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "mock"))]
impl SequenceNumberSource {
    /// `values` must not be empty
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            next: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.next.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "mock"))]
impl NumberSource for SequenceNumberSource {
    fn draw(&self) -> i32 {
        let i = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.values.is_empty() {
            return 0;
        }
        self.values[i % self.values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_draws_stay_in_range() {
        let source = FakeNumberSource;
        for _ in 0..1_000 {
            let n = source.draw();
            assert!((0..MAX_POLICY_NUMBER).contains(&n));
        }
    }

    #[test]
    fn test_sequence_wraps() {
        let source = SequenceNumberSource::new(vec![7, 8]);
        assert_eq!((0..5).map(|_| source.draw()).collect::<Vec<_>>(), vec![7, 8, 7, 8, 7]);
        assert_eq!(source.draws(), 5);
    }
}
