use crate::{traits::CostFunction, Float};
use std::convert::Infallible;

/// A parabola with a single minimum.
///
/// ```math
/// f(x) = (x - c)^2
/// ```
/// The global minimum is $`f(c) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parabola {
    /// The location $`c`$ of the minimum.
    pub center: Float,
}
impl Parabola {
    /// Create a new [`Parabola`] with its minimum at `center`.
    pub const fn new(center: Float) -> Self {
        Self { center }
    }
}
impl CostFunction for Parabola {
    fn evaluate(&self, x: Float, _args: &()) -> Result<Float, Infallible> {
        Ok((x - self.center).powi(2))
    }
}
