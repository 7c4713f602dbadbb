use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Splits `work` items over a number of workers into contiguous blocks.
///
/// If there are no more items than workers, the first `work` workers get one item each. Otherwise
/// each worker in turn takes `remaining_work / remaining_workers` items, which pushes the rounding
/// remainder towards the last workers:
///
/// ```rust
/// use strongin::distributed::WorkSplitter;
///
/// assert_eq!(WorkSplitter::new(10, 3).counts(), &[3, 3, 4]);
/// assert_eq!(WorkSplitter::new(2, 5).counts(), &[1, 1, 0, 0, 0]);
/// ```
///
/// The split is a pure function of `(work, workers)`, so every worker of a group can compute it
/// independently and arrive at the same answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSplitter {
    counts: Vec<usize>,
}

impl WorkSplitter {
    /// Split `work` items over `workers` workers.
    ///
    /// # Panics
    ///
    /// This method will panic if `workers == 0`.
    pub fn new(work: usize, workers: usize) -> Self {
        assert!(workers > 0, "work cannot be split over zero workers");
        let mut counts = vec![0; workers];
        if work <= workers {
            counts.iter_mut().take(work).for_each(|count| *count = 1);
        } else {
            let mut remaining_work = work;
            let mut remaining_workers = workers;
            for count in counts.iter_mut() {
                if remaining_work == 0 {
                    break;
                }
                *count = remaining_work / remaining_workers;
                remaining_work -= *count;
                remaining_workers -= 1;
            }
        }
        Self { counts }
    }

    /// The number of workers the work was split over.
    pub fn workers(&self) -> usize {
        self.counts.len()
    }

    /// The number of items assigned to every worker, in rank order.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The number of items assigned to `worker`.
    ///
    /// # Panics
    ///
    /// This method will panic if `worker` is not a valid worker index.
    pub fn part_work(&self, worker: usize) -> usize {
        self.counts[worker]
    }

    /// The number of items assigned to workers `0..worker`, which is also the global index of the
    /// first item assigned to `worker`.
    ///
    /// # Panics
    ///
    /// This method will panic if `worker` is greater than the number of workers.
    pub fn prev_part_work(&self, worker: usize) -> usize {
        self.counts[..worker].iter().sum()
    }

    /// The global indices of the items assigned to `worker`.
    ///
    /// # Panics
    ///
    /// This method will panic if `worker` is not a valid worker index.
    pub fn range(&self, worker: usize) -> Range<usize> {
        let start = self.prev_part_work(worker);
        start..start + self.part_work(worker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascading_split() {
        assert_eq!(WorkSplitter::new(10, 3).counts(), &[3, 3, 4]);
        assert_eq!(WorkSplitter::new(11, 4).counts(), &[2, 3, 3, 3]);
        assert_eq!(WorkSplitter::new(7, 2).counts(), &[3, 4]);
        assert_eq!(WorkSplitter::new(9, 3).counts(), &[3, 3, 3]);
        assert_eq!(WorkSplitter::new(100, 7).counts(), &[14, 14, 14, 14, 14, 15, 15]);
    }

    #[test]
    fn test_fewer_items_than_workers() {
        assert_eq!(WorkSplitter::new(2, 5).counts(), &[1, 1, 0, 0, 0]);
        assert_eq!(WorkSplitter::new(0, 3).counts(), &[0, 0, 0]);
        assert_eq!(WorkSplitter::new(4, 4).counts(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_sum_and_prefix_sums() {
        for work in 0..60 {
            for workers in 1..12 {
                let splitter = WorkSplitter::new(work, workers);
                assert_eq!(splitter.workers(), workers);
                assert_eq!(splitter.counts().iter().sum::<usize>(), work);
                let mut prefix = 0;
                for worker in 0..workers {
                    assert_eq!(splitter.prev_part_work(worker), prefix);
                    assert_eq!(splitter.range(worker), prefix..prefix + splitter.part_work(worker));
                    prefix += splitter.part_work(worker);
                }
                assert_eq!(splitter.prev_part_work(workers), work);
            }
        }
    }

    #[test]
    #[should_panic(expected = "zero workers")]
    fn test_zero_workers() {
        let _ = WorkSplitter::new(3, 0);
    }
}
