//! `strongin` finds the global minimum of a one-dimensional Lipschitz-continuous function on a
//! closed interval using Strongin's information-statistical method. No derivatives are needed and
//! the function may have any number of local minima.
//!
//! The per-iteration reductions (estimating the Lipschitz constant and locating the most promising
//! interval) can run either in-process or split over a group of workers which only talk to each
//! other through a message-passing [`Communicator`](crate::traits::Communicator).
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [Distributed Execution](#distributed-execution)
//! - [The Algorithm](#the-algorithm)
//!
//! # Quick Start
//!
//! The simplest entry point takes a closure, the search interval, and the tolerance on the length
//! of the selected interval:
//!
//! ```rust
//! use strongin::algorithms::strongin::minimize;
//! use strongin::Float;
//!
//! let fx = minimize(|x: Float| (x - 0.5).powi(2) + 1.0, -1.0, 2.0, 1e-4).unwrap();
//! assert!((fx - 1.0).abs() < 1e-3);
//! ```
//!
//! For more control, implement [`CostFunction`](crate::traits::CostFunction) and run the
//! [`Strongin`](crate::algorithms::strongin::Strongin) algorithm directly:
//!
//! ```rust
//! use std::convert::Infallible;
//! use strongin::algorithms::strongin::{Strongin, StronginConfig};
//! use strongin::traits::{Algorithm, CostFunction};
//! use strongin::Float;
//!
//! struct Wiggle;
//! impl CostFunction for Wiggle {
//!     fn evaluate(&self, x: Float, _args: &()) -> Result<Float, Infallible> {
//!         Ok(x.sin() + (10.0 * x / 3.0).sin())
//!     }
//! }
//!
//! let mut solver = Strongin::new();
//! let summary = solver
//!     .process(
//!         &Wiggle,
//!         &(),
//!         StronginConfig::new(2.7, 7.5).with_epsilon(1e-5),
//!         Strongin::default_callbacks(),
//!     )
//!     .unwrap();
//! assert!(summary.converged);
//! assert!((summary.x - 5.1457).abs() < 1e-2);
//! ```
//!
//! # Distributed Execution
//!
//! Every worker keeps its own copy of the partition and applies the same split at the end of
//! every iteration. The coordinator (rank 0) hands out slices, reduces the partial Lipschitz
//! estimates, gathers the local best characteristics and broadcasts the winner. The crate ships an
//! in-process [`ThreadGroup`](crate::distributed::ThreadGroup) which runs one worker per thread:
//!
//! ```rust
//! use strongin::algorithms::strongin::minimize_distributed;
//! use strongin::distributed::ThreadGroup;
//! use strongin::Float;
//!
//! let results = ThreadGroup::run(4, |comm| {
//!     minimize_distributed(comm, |x: Float| x * x, -1.0, 2.0, 1e-4)
//! });
//! for fx in results {
//!     assert!(fx.unwrap().abs() < 1e-3);
//! }
//! ```
//!
//! # The Algorithm
//!
//! Starting from the single interval $`[a, b]`$, each iteration computes the estimate
//! ```math
//! M = \max_i \frac{|f(y_i) - f(y_{i-1})|}{y_i - y_{i-1}}
//! ```
//! inflates it to $`m = rM`$ (or $`m = 1`$ when $`M = 0`$), scores every interval with the
//! characteristic
//! ```math
//! R_i = m(y_i - y_{i-1}) + \frac{(f(y_i) - f(y_{i-1}))^2}{m(y_i - y_{i-1})} - 2(f(y_i) + f(y_{i-1}))
//! ```
//! and splits the best interval at
//! ```math
//! y^* = \frac{y_i + y_{i-1}}{2} + \frac{f(y_i) - f(y_{i-1})}{2m}
//! ```
//! until the chosen interval is shorter than $`\varepsilon`$.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing minimization algorithms.
pub mod algorithms;
/// Module containing core types shared by algorithms (callbacks, points, summaries, errors).
pub mod core;
/// Module containing the process-group machinery used by distributed reductions.
pub mod distributed;
/// Module containing standard one-dimensional functions for testing algorithms.
pub mod test_functions;
/// Module containing the traits which make up the public interface of the crate.
pub mod traits;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` unless the `f32` feature is enabled).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;
