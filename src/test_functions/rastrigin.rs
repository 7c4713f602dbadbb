use crate::{traits::CostFunction, Float, PI};
use std::convert::Infallible;

/// The one-dimensional Rastrigin function, a non-convex function with a single minimum but many
/// local minima.
///
/// ```math
/// f(x) = 10 + x^2 - 10\cos(2\pi x)
/// ```
/// The usual search domain is $`[-5.12, 5.12]`$ and the global minimum is $`f(0) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: Float, _args: &()) -> Result<Float, Infallible> {
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 + x.powi(2) - 10.0 * Float::cos(2.0 * PI * x))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_minimum_and_local_minima() {
        assert_eq!(Rastrigin.evaluate(0.0, &()).unwrap(), 0.0);
        assert_relative_eq!(Rastrigin.evaluate(1.0, &()).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(Rastrigin.evaluate(0.5, &()).unwrap(), 20.25, epsilon = 1e-12);
    }
}
