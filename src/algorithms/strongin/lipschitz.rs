//! Estimates of the Lipschitz constant of the objective.

use crate::{algorithms::strongin::Interval, traits::CostFunction, Float};

/// The largest absolute slope `|f(end) - f(begin)| / (end - begin)` over `intervals`, or `0` if
/// there are none.
///
/// # Errors
///
/// Returns an `Err(E)` if any evaluation fails.
pub fn estimate<P, U, E>(problem: &P, intervals: &[Interval], args: &U) -> Result<Float, E>
where
    P: CostFunction<U, E> + ?Sized,
{
    let mut lipschitz: Float = 0.0;
    for interval in intervals {
        let delta = problem.evaluate(interval.end, args)? - problem.evaluate(interval.begin, args)?;
        let slope = Float::abs(delta / interval.length());
        if slope > lipschitz {
            lipschitz = slope;
        }
    }
    Ok(lipschitz)
}

/// Inflate the estimate by the reliability parameter `r`. A flat estimate of zero maps to `1` so
/// the characteristic stays well defined.
pub fn secondary_estimate(lipschitz: Float, reliability: Float) -> Float {
    if lipschitz == 0.0 {
        1.0
    } else {
        reliability * lipschitz
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{algorithms::strongin::Partition, traits::ScalarFn};

    fn random_partition(seed: u64, len: usize) -> Partition {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut partition = Partition::new(-2.0, 5.0);
        while partition.len() < len {
            let index = rng.usize(..partition.len());
            let interval = partition.intervals()[index];
            let at = interval.begin + interval.length() * (0.1 + 0.8 * rng.f64() as Float);
            partition.split(index, at);
        }
        partition
    }

    #[test]
    fn test_linear_function() {
        let f = ScalarFn(|x: Float| 2.0 * x + 1.0);
        let intervals = [Interval::new(0.0, 0.25), Interval::new(0.25, 1.0)];
        assert_relative_eq!(estimate(&f, &intervals, &()).unwrap(), 2.0);
    }

    #[test]
    fn test_linear_function_over_random_partitions() {
        for slope in [2.0, -3.5, 0.25] {
            let f = ScalarFn(move |x: Float| slope * x - 4.0);
            for (seed, len) in [(11, 1), (12, 4), (13, 25), (14, 80)] {
                let partition = random_partition(seed, len);
                assert_relative_eq!(
                    estimate(&f, partition.intervals(), &()).unwrap(),
                    Float::abs(slope),
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn test_steepest_interval_wins() {
        let f = ScalarFn(|x: Float| x * x);
        let intervals = [
            Interval::new(-1.0, 0.0),
            Interval::new(0.0, 0.5),
            Interval::new(1.5, 2.0),
        ];
        assert_relative_eq!(estimate(&f, &intervals, &()).unwrap(), 3.5);
    }

    #[test]
    fn test_empty_and_flat() {
        let f = ScalarFn(|_: Float| 3.0);
        assert_eq!(estimate(&f, &[], &()).unwrap(), 0.0);
        assert_eq!(
            estimate(&f, &[Interval::new(0.0, 1.0)], &()).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_secondary_estimate() {
        assert_eq!(secondary_estimate(0.0, 2.0), 1.0);
        assert_eq!(secondary_estimate(1.5, 2.0), 3.0);
        assert_eq!(secondary_estimate(1.5, 4.0), 6.0);
    }
}
