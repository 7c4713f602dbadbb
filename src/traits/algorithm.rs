use crate::{
    core::Callbacks,
    traits::{Status, Terminator},
};

/// A trait representing a minimization algorithm.
///
/// This trait is implemented for the algorithms found in the [`algorithms`](crate::algorithms)
/// module, and contains all the methods needed to be run by [`Algorithm::process`].
pub trait Algorithm<P, S: Status, U, E> {
    /// A type which holds a summary of the algorithm's ending state.
    type Summary;
    /// The configuration struct for the algorithm.
    type Config;

    /// Any setup work done before the main steps of the algorithm should be done here.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the configuration is invalid or an evaluation fails. See
    /// [`CostFunction::evaluate`](crate::traits::CostFunction::evaluate) for more information.
    fn initialize(
        &mut self,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &Self::Config,
    ) -> Result<(), E>;

    /// The main "step" of an algorithm, which is repeated until termination conditions are met or
    /// the max number of steps have been taken.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See
    /// [`CostFunction::evaluate`](crate::traits::CostFunction::evaluate) for more information.
    fn step(
        &mut self,
        current_step: usize,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &Self::Config,
    ) -> Result<(), E>;

    /// Runs any steps needed by the [`Algorithm`] after termination or convergence. This will run
    /// regardless of whether the [`Algorithm`] converged.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See
    /// [`CostFunction::evaluate`](crate::traits::CostFunction::evaluate) for more information.
    #[allow(unused_variables)]
    fn postprocessing(
        &mut self,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &Self::Config,
    ) -> Result<(), E> {
        Ok(())
    }

    /// Generates a new [`Algorithm::Summary`] from the current state of the [`Algorithm`], which
    /// can be displayed or used elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any internal evaluation fails while creating the
    /// [`Algorithm::Summary`].
    fn summarize(
        &self,
        current_step: usize,
        problem: &P,
        status: &S,
        args: &U,
        config: &Self::Config,
    ) -> Result<Self::Summary, E>;

    /// Reset the algorithm to its initial state.
    fn reset(&mut self) {}

    /// The [`Callbacks`] an [`Algorithm`] needs in order to terminate on its own.
    fn default_callbacks() -> Callbacks<Self, P, S, U, E, Self::Config>
    where
        Self: Sized,
    {
        Callbacks::empty()
    }

    /// Run the [`Algorithm`] on the given problem until one of the [`Callbacks`] signals
    /// termination.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any of the [`Algorithm`]'s methods fail.
    fn process(
        &mut self,
        problem: &P,
        args: &U,
        config: Self::Config,
        mut callbacks: Callbacks<Self, P, S, U, E, Self::Config>,
    ) -> Result<Self::Summary, E>
    where
        Self: Sized,
    {
        let mut status = S::default();
        status.reset();
        self.reset();
        self.initialize(problem, &mut status, args, &config)?;
        let mut current_step = 0;
        loop {
            self.step(current_step, problem, &mut status, args, &config)?;
            if callbacks
                .check_for_termination(current_step, self, problem, &mut status, args, &config)
                .is_break()
            {
                break;
            }
            current_step += 1;
        }
        self.postprocessing(problem, &mut status, args, &config)?;
        self.summarize(current_step, problem, &status, args, &config)
    }
}
