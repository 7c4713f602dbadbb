use serde::{Deserialize, Serialize};

use crate::Float;

/// A closed sub-interval `[begin, end]` of the search domain with `begin < end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// The left endpoint.
    pub begin: Float,
    /// The right endpoint.
    pub end: Float,
}

impl Interval {
    /// Create a new [`Interval`].
    pub const fn new(begin: Float, end: Float) -> Self {
        Self { begin, end }
    }

    /// The length `end - begin` of the interval.
    pub fn length(&self) -> Float {
        self.end - self.begin
    }

    /// The point `(begin + end) / 2`.
    pub fn midpoint(&self) -> Float {
        self.begin + self.length() / 2.0
    }

    /// Returns `true` if `x` lies strictly between the endpoints.
    pub fn contains_strictly(&self, x: Float) -> bool {
        self.begin < x && x < self.end
    }
}

/// The adaptive partition of the search domain.
///
/// Intervals are stored in the order they were created, not sorted by position. A new interval is
/// only ever produced by [`Partition::split`], which keeps the union of all intervals equal to the
/// search domain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    intervals: Vec<Interval>,
}

impl Partition {
    /// A partition made of the single interval `[a, b]`.
    pub fn new(a: Float, b: Float) -> Self {
        Self {
            intervals: vec![Interval::new(a, b)],
        }
    }

    /// A partition without any intervals.
    pub const fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// The number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the partition holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The intervals in creation order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The interval at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    /// Split the interval at `index` into `[begin, at]` and `[at, end]`. The left half is appended
    /// to the end of the partition and the right half stays at `index`.
    ///
    /// # Panics
    ///
    /// This method will panic if `index` is out of range.
    pub fn split(&mut self, index: usize, at: Float) {
        let interval = &mut self.intervals[index];
        debug_assert!(
            interval.contains_strictly(at),
            "split point {} outside of [{}, {}]",
            at,
            interval.begin,
            interval.end
        );
        let left = Interval::new(interval.begin, at);
        interval.begin = at;
        self.intervals.push(left);
    }

    /// All interval endpoints in increasing order, without duplicates.
    pub fn sorted_points(&self) -> Vec<Float> {
        let mut points: Vec<Float> = self
            .intervals
            .iter()
            .flat_map(|interval| [interval.begin, interval.end])
            .collect();
        points.sort_by(|a, b| a.total_cmp(b));
        points.dedup();
        points
    }
}

impl From<Vec<Interval>> for Partition {
    fn from(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_appends_left_half() {
        let mut partition = Partition::new(0.0, 4.0);
        partition.split(0, 1.0);
        assert_eq!(
            partition.intervals(),
            &[Interval::new(1.0, 4.0), Interval::new(0.0, 1.0)]
        );
        partition.split(0, 3.0);
        assert_eq!(
            partition.intervals(),
            &[
                Interval::new(3.0, 4.0),
                Interval::new(0.0, 1.0),
                Interval::new(1.0, 3.0)
            ]
        );
    }

    #[test]
    fn test_splits_preserve_cover() {
        let mut partition = Partition::new(-1.0, 2.0);
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let index = rng.usize(..partition.len());
            let interval = partition.intervals()[index];
            let at = interval.begin + interval.length() * (0.1 + 0.8 * rng.f64() as Float);
            partition.split(index, at);
        }
        assert_eq!(partition.len(), 51);
        let points = partition.sorted_points();
        assert_eq!(points.len(), 52);
        assert_eq!(points[0], -1.0);
        assert_eq!(points[points.len() - 1], 2.0);
        let mut sorted = partition.intervals().to_vec();
        sorted.sort_by(|a, b| a.begin.total_cmp(&b.begin));
        for pair in sorted.windows(2) {
            assert_eq!(pair[0].end, pair[1].begin);
        }
        assert!(sorted.iter().all(|interval| interval.length() > 0.0));
    }

    #[test]
    fn test_interval_helpers() {
        let interval = Interval::new(1.0, 3.0);
        assert_eq!(interval.length(), 2.0);
        assert_eq!(interval.midpoint(), 2.0);
        assert!(interval.contains_strictly(2.5));
        assert!(!interval.contains_strictly(3.0));
    }
}
