//! Bounded recency buffer of pointer samples.

use std::{collections::VecDeque, time::Duration};

use crate::{pointer::PointerSample, px::Px};

/// Default number of samples kept per gesture.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Net horizontal direction of a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// The oldest sample lies right of the newest one.
    Left,
    /// The oldest sample lies left of the newest one.
    Right,
}

/// Sliding window over the most recent pointer samples of a gesture.
///
/// Pushing into a full history evicts the single oldest sample, so the buffer
/// never holds more than `capacity` entries and keeps them in push order.
#[derive(Debug, Clone)]
pub struct PointerHistory {
    samples: VecDeque<PointerSample>,
    capacity: usize,
}

impl Default for PointerHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PointerHistory {
    /// Creates an empty history holding at most `capacity` samples.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Appends a sample, evicting the oldest one first when full.
    pub fn push(&mut self, sample: PointerSample) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Drops every sample.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// The longest-resident sample.
    pub fn oldest(&self) -> Option<&PointerSample> {
        self.samples.front()
    }

    /// The most recently pushed sample.
    pub fn newest(&self) -> Option<&PointerSample> {
        self.samples.back()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }

    /// Absolute time spanned by the window, from oldest to newest sample.
    pub fn elapsed(&self) -> Option<Duration> {
        let (oldest, newest) = (self.oldest()?, self.newest()?);
        Some(oldest.elapsed_between(newest))
    }

    /// Classifies the net horizontal movement across the window.
    ///
    /// Returns [`SwipeDirection::Left`] when `oldest.x - newest.x` exceeds
    /// `min_delta`, [`SwipeDirection::Right`] when it is below `-min_delta`,
    /// and `None` otherwise. An empty history has no direction.
    pub fn classify_swipe(&self, min_delta: Px) -> Option<SwipeDirection> {
        let (oldest, newest) = (self.oldest()?, self.newest()?);
        let delta_x = oldest.x() - newest.x();

        if delta_x > min_delta {
            Some(SwipeDirection::Left)
        } else if delta_x < -min_delta {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: i32, t: u64) -> PointerSample {
        PointerSample::new([x, 0], Duration::from_millis(t))
    }

    #[test]
    fn push_beyond_capacity_keeps_last_samples_in_order() {
        for capacity in 1..=7 {
            let mut history = PointerHistory::with_capacity(capacity);
            let pushes = capacity * 3 + 1;
            for i in 0..pushes {
                history.push(sample(i as i32, i as u64));
            }

            assert_eq!(history.len(), capacity);
            let retained: Vec<i32> = history.iter().map(|s| s.x().raw()).collect();
            let expected: Vec<i32> = ((pushes - capacity)..pushes).map(|i| i as i32).collect();
            assert_eq!(retained, expected);
        }
    }

    #[test]
    fn eviction_drops_a_single_sample() {
        let mut history = PointerHistory::default();
        for i in 0..5 {
            history.push(sample(i, 0));
        }
        history.push(sample(5, 0));

        assert_eq!(history.len(), 5);
        assert_eq!(history.oldest().map(|s| s.x()), Some(Px(1)));
        assert_eq!(history.newest().map(|s| s.x()), Some(Px(5)));
    }

    #[test]
    fn clear_empties_the_window() {
        let mut history = PointerHistory::default();
        history.push(sample(1, 0));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.oldest(), None);
        assert_eq!(history.newest(), None);
    }

    #[test]
    fn classification_follows_oldest_minus_newest() {
        for threshold in [0, 1, 3, 10, 50] {
            for delta in -60..=60 {
                let mut history = PointerHistory::default();
                history.push(sample(100 + delta, 0));
                history.push(sample(100, 10));

                let expected = if delta > threshold {
                    Some(SwipeDirection::Left)
                } else if delta < -threshold {
                    Some(SwipeDirection::Right)
                } else {
                    None
                };
                assert_eq!(history.classify_swipe(Px(threshold)), expected);
            }
        }
    }

    #[test]
    fn classification_of_a_simple_left_flick() {
        let mut history = PointerHistory::default();
        history.push(sample(300, 0));
        history.push(sample(100, 100));

        assert_eq!(history.classify_swipe(Px(3)), Some(SwipeDirection::Left));
        assert_eq!(history.elapsed(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn empty_history_has_no_direction() {
        let history = PointerHistory::default();
        assert_eq!(history.classify_swipe(Px(3)), None);
        assert_eq!(history.elapsed(), None);
    }

    #[test]
    fn zero_capacity_is_treated_as_one() {
        let mut history = PointerHistory::with_capacity(0);
        history.push(sample(1, 0));
        history.push(sample(2, 0));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.newest().map(|s| s.x()), Some(Px(2)));
    }
}
