/// [`Callbacks`] container and the generic [`Terminator`](crate::traits::Terminator)s and
/// [`Observer`](crate::traits::Observer)s.
pub mod callbacks;
/// Error types returned by algorithms and communicators.
pub mod error;
/// [`Point`] type for an evaluated location.
pub mod point;
/// [`StronginSummary`] type for the result of the minimization.
pub mod summary;

pub use callbacks::{Callbacks, DebugObserver, MaxSteps};
pub use error::{CommError, StronginError};
pub use point::Point;
pub use summary::StronginSummary;
