use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{traits::CostFunction, Float};

/// Describes an evaluated location on the real line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: Float,
    /// the point's evaluation (`NaN` if the point has not been evaluated)
    pub fx: Float,
}
impl Default for Point {
    fn default() -> Self {
        Self {
            x: Float::NAN,
            fx: Float::NAN,
        }
    }
}
impl Point {
    /// Evaluate the given function at `x` and return the resulting [`Point`].
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// `std::convert::Infallible` if the function evaluation never fails.
    pub fn evaluate<P, U, E>(func: &P, x: Float, args: &U) -> Result<Self, E>
    where
        P: CostFunction<U, E> + ?Sized,
    {
        Ok(Self {
            x,
            fx: func.evaluate(x, args)?,
        })
    }
    /// Returns `true` if the point carries a function value.
    pub fn is_evaluated(&self) -> bool {
        !self.fx.is_nan()
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fx.total_cmp(&other.fx)
    }
    /// Convert the [`Point`] into a `(x, fx)` tuple.
    pub const fn destructure(self) -> (Float, Float) {
        (self.x, self.fx)
    }
}
impl From<(Float, Float)> for Point {
    fn from(value: (Float, Float)) -> Self {
        Self {
            x: value.0,
            fx: value.1,
        }
    }
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f({}) = {}", self.x, self.fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ScalarFn;

    #[test]
    fn test_evaluate() {
        let point = Point::evaluate(&ScalarFn(|x: Float| 3.0 * x), 2.0, &()).unwrap();
        assert_eq!(point.destructure(), (2.0, 6.0));
        assert!(point.is_evaluated());
        assert!(!Point::default().is_evaluated());
    }

    #[test]
    fn test_ordering() {
        let a = Point::from((0.0, 1.0));
        let b = Point::from((5.0, -1.0));
        assert_eq!(a.total_cmp(&b), std::cmp::Ordering::Greater);
        assert_eq!(b.to_string(), "f(5) = -1");
    }
}
