//! Interval characteristics and the selection of the most promising interval.

use serde::{Deserialize, Serialize};

use crate::{algorithms::strongin::Interval, traits::CostFunction, Float};

/// The score of the most promising interval together with its position in the partition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    /// The characteristic $`R`$ of the interval.
    pub score: Float,
    /// The index of the interval, or `None` if no interval was scored.
    pub index: Option<usize>,
}

impl Characteristic {
    /// The record of an empty scan: a score of $`-\infty`$ and no index.
    pub const fn none() -> Self {
        Self {
            score: Float::NEG_INFINITY,
            index: None,
        }
    }

    /// Shift the index by `offset`, turning a slice-local index into a global one.
    pub fn offset(self, offset: usize) -> Self {
        Self {
            score: self.score,
            index: self.index.map(|index| index + offset),
        }
    }
}

impl Default for Characteristic {
    fn default() -> Self {
        Self::none()
    }
}

/// The characteristic
/// ```math
/// R = m d + \frac{(f_1 - f_0)^2}{m d} - 2 (f_1 + f_0)
/// ```
/// of an interval of length $`d`$ with endpoint values $`f_0`$ and $`f_1`$.
pub fn characteristic(m: Float, length: Float, f_begin: Float, f_end: Float) -> Float {
    let md = m * length;
    let delta = f_end - f_begin;
    md + delta * delta / md - 2.0 * (f_end + f_begin)
}

/// Score every interval in `intervals` and return the best one. Ties keep the earliest index.
///
/// # Errors
///
/// Returns an `Err(E)` if any evaluation fails.
pub fn select<P, U, E>(
    problem: &P,
    intervals: &[Interval],
    m: Float,
    args: &U,
) -> Result<Characteristic, E>
where
    P: CostFunction<U, E> + ?Sized,
{
    let mut best = Characteristic::none();
    for (index, interval) in intervals.iter().enumerate() {
        let f_begin = problem.evaluate(interval.begin, args)?;
        let f_end = problem.evaluate(interval.end, args)?;
        let score = characteristic(m, interval.length(), f_begin, f_end);
        if score > best.score {
            best = Characteristic {
                score,
                index: Some(index),
            };
        }
    }
    Ok(best)
}

/// The position of the best record in `records`, keeping the earliest one on ties. Returns
/// `None` only if `records` is empty.
pub fn best_of(records: &[Characteristic]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (position, record) in records.iter().enumerate() {
        let better = match best {
            Some(current) => record.score > records[current].score,
            None => true,
        };
        if better {
            best = Some(position);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::traits::ScalarFn;

    #[test]
    fn test_characteristic_value() {
        // m d = 2, (f1 - f0)^2 / (m d) = 4 / 2, 2 (f1 + f0) = 8
        assert_relative_eq!(characteristic(1.0, 2.0, 1.0, 3.0), -4.0);
        assert_relative_eq!(characteristic(2.0, 0.5, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_single_interval() {
        let f = ScalarFn(|x: Float| x * x);
        let best = select(&f, &[Interval::new(-1.0, 2.0)], 2.0, &()).unwrap();
        assert_eq!(best.index, Some(0));
        assert_relative_eq!(best.score, characteristic(2.0, 3.0, 1.0, 4.0));
    }

    #[test]
    fn test_ties_keep_first() {
        let f = ScalarFn(|_: Float| 0.0);
        let intervals = [
            Interval::new(0.0, 0.25),
            Interval::new(0.5, 1.0),
            Interval::new(0.25, 0.5),
            Interval::new(1.0, 1.5),
        ];
        let best = select(&f, &intervals, 1.0, &()).unwrap();
        assert_eq!(best.index, Some(1));
        assert_relative_eq!(best.score, 0.5);
    }

    #[test]
    fn test_empty_scan() {
        let f = ScalarFn(|x: Float| x);
        assert_eq!(select(&f, &[], 1.0, &()).unwrap(), Characteristic::none());
    }

    #[test]
    fn test_best_of() {
        let records = [
            Characteristic {
                score: 1.0,
                index: Some(3),
            },
            Characteristic {
                score: 2.0,
                index: Some(0),
            },
            Characteristic::none(),
            Characteristic {
                score: 2.0,
                index: Some(1),
            },
        ];
        assert_eq!(best_of(&records), Some(1));
        assert_eq!(best_of(&[Characteristic::none()]), Some(0));
        assert_eq!(best_of(&[]), None);
        assert_eq!(records[1].offset(5).index, Some(5));
        assert_eq!(Characteristic::none().offset(5).index, None);
    }
}
