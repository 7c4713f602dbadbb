/// Module containing the parabola test function.
pub mod parabola;
pub use parabola::Parabola;

/// Module containing the sine test function.
pub mod sine;
pub use sine::Sine;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;
