use std::convert::Infallible;

use crate::Float;

/// A trait which describes a function $`f(\mathbb{R}) \to \mathbb{R}`$
///
/// Such a function may also take an `args: &U` field which can be used to pass external
/// arguments to the function during minimization.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution.
///
/// Implementations must be deterministic: distributed minimization relies on every worker
/// obtaining bit-identical values for the same input.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: Float, args: &U) -> Result<Float, E>;
}

/// Adapts a plain closure `Fn(Float) -> Float` into a [`CostFunction`].
///
/// ```rust
/// use strongin::traits::{CostFunction, ScalarFn};
/// use strongin::Float;
///
/// let f = ScalarFn(|x: Float| 2.0 * x);
/// assert_eq!(f.evaluate(3.0, &()).unwrap(), 6.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ScalarFn<F>(pub F);

impl<F> CostFunction for ScalarFn<F>
where
    F: Fn(Float) -> Float,
{
    fn evaluate(&self, x: Float, _args: &()) -> Result<Float, Infallible> {
        Ok((self.0)(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shifted;
    impl CostFunction<Float, String> for Shifted {
        fn evaluate(&self, x: Float, args: &Float) -> Result<Float, String> {
            if x.is_nan() {
                return Err("nan input".to_string());
            }
            Ok(x + args)
        }
    }

    #[test]
    fn test_cost_function_with_args() {
        assert_eq!(Shifted.evaluate(1.0, &2.5), Ok(3.5));
        assert_eq!(
            Shifted.evaluate(Float::NAN, &0.0),
            Err("nan input".to_string())
        );
    }

    #[test]
    fn test_scalar_fn() {
        let f = ScalarFn(|x: Float| x.powi(2) + 1.0);
        assert_eq!(f.evaluate(2.0, &()).unwrap(), 5.0);
    }
}
