/// Module containing the [`Algorithm`] trait.
pub mod algorithm;
/// Module containing the [`Terminator`] and [`Observer`] callback traits.
pub mod callback;
/// Module containing the [`Communicator`] trait.
pub mod communicator;
/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`Status`] trait.
pub mod status;

pub use algorithm::Algorithm;
pub use callback::{Observer, Terminator};
pub use communicator::Communicator;
pub use cost_function::{CostFunction, ScalarFn};
pub use status::Status;
