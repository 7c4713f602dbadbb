use crate::{traits::CostFunction, Float};
use std::convert::Infallible;

/// The sine function, $`f(x) = \sin(x)`$. On $`[0, 2\pi]`$ the global minimum is
/// $`f(3\pi/2) = -1`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sine;
impl CostFunction for Sine {
    fn evaluate(&self, x: Float, _args: &()) -> Result<Float, Infallible> {
        Ok(x.sin())
    }
}
