use std::{cell::Cell, convert::Infallible, ops::ControlFlow};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    core::{Callbacks, MaxSteps, Point, StronginError, StronginSummary},
    traits::{Algorithm, Communicator, CostFunction, ScalarFn, Status, Terminator},
    Float,
};

/// Characteristics and selection of the most promising interval.
pub mod characteristic;
/// Estimates of the Lipschitz constant.
pub mod lipschitz;
/// Intervals and the adaptive partition of the search domain.
pub mod partition;
/// Sequential and distributed reductions.
pub mod reduction;

pub use characteristic::Characteristic;
pub use partition::{Interval, Partition};
pub use reduction::{Distributed, Reduction, Sequential, SliceSource};

/// The interval chosen on the latest iteration, with its endpoints evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// The index of the interval in the partition.
    pub index: usize,
    /// The characteristic of the interval.
    pub score: Float,
    /// The left endpoint.
    pub begin: Point,
    /// The right endpoint.
    pub end: Point,
}

impl Selection {
    /// The length of the selected interval.
    pub fn length(&self) -> Float {
        self.end.x - self.begin.x
    }

    /// The point where the selected interval is split when the search goes on.
    pub fn split_point(&self, m: Float) -> Float {
        self.begin.x + self.length() / 2.0 + (self.end.fx - self.begin.fx) / (2.0 * m)
    }
}

/// The internal state of the [`Strongin`] algorithm.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StronginStatus {
    /// The current estimate $`M`$ of the Lipschitz constant.
    pub lipschitz: Float,
    /// The inflated estimate $`m`$ used by the characteristic.
    pub m: Float,
    /// The interval selected on the latest iteration.
    pub selected: Option<Selection>,
    /// The reported minimum, set once the algorithm converges.
    pub best: Point,
    /// The number of intervals in the partition.
    pub intervals: usize,
    /// The number of completed iterations.
    pub iteration: usize,
    /// The number of function evaluations made by this worker.
    pub cost_evals: usize,
    /// Flag that says whether or not the fit is in a converged state.
    pub converged: bool,
    /// A message containing information about the condition of the fit.
    pub message: String,
}

impl StronginStatus {
    /// Mark the status as converged.
    pub fn set_converged(&mut self) {
        self.converged = true;
    }
}

impl Status for StronginStatus {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn converged(&self) -> bool {
        self.converged
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

/// The configuration struct for the [`Strongin`] algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StronginConfig {
    a: Float,
    b: Float,
    epsilon: Float,
    reliability: Float,
}

impl StronginConfig {
    /// Create a new configuration for a search over `[a, b]`.
    pub const fn new(a: Float, b: Float) -> Self {
        Self {
            a,
            b,
            epsilon: 1e-4,
            reliability: 2.0,
        }
    }

    /// Set the tolerance on the length of the selected interval (default = `1e-4`).
    pub const fn with_epsilon(mut self, epsilon: Float) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the reliability parameter $`r`$ which inflates the Lipschitz estimate
    /// (default = `2`).
    pub const fn with_reliability(mut self, reliability: Float) -> Self {
        self.reliability = reliability;
        self
    }

    /// The search interval.
    pub const fn bounds(&self) -> (Float, Float) {
        (self.a, self.b)
    }

    /// The tolerance on the length of the selected interval.
    pub const fn epsilon(&self) -> Float {
        self.epsilon
    }

    /// The reliability parameter.
    pub const fn reliability(&self) -> Float {
        self.reliability
    }

    fn validate<E>(&self) -> Result<(), StronginError<E>> {
        if !(self.a.is_finite() && self.b.is_finite() && self.a < self.b) {
            return Err(StronginError::InvalidInterval {
                a: self.a,
                b: self.b,
            });
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(StronginError::InvalidTolerance(self.epsilon));
        }
        if !(self.reliability.is_finite() && self.reliability > 1.0) {
            return Err(StronginError::InvalidReliability(self.reliability));
        }
        Ok(())
    }
}

/// Counts the evaluations made through it.
struct Counted<'a, P: ?Sized> {
    problem: &'a P,
    evals: Cell<usize>,
}

impl<'a, P: ?Sized> Counted<'a, P> {
    const fn new(problem: &'a P) -> Self {
        Self {
            problem,
            evals: Cell::new(0),
        }
    }
}

impl<P, U, E> CostFunction<U, E> for Counted<'_, P>
where
    P: CostFunction<U, E> + ?Sized,
{
    fn evaluate(&self, x: Float, args: &U) -> Result<Float, E> {
        self.evals.set(self.evals.get() + 1);
        self.problem.evaluate(x, args)
    }
}

/// Strongin's global search for the minimum of a Lipschitz-continuous function on an interval.
///
/// Each step estimates the Lipschitz constant over the current partition, scores every interval
/// with its characteristic and records the best one in the [`StronginStatus`]. The next step
/// first splits that interval at the point predicted by the estimate. The two reductions over the
/// partition are delegated to a [`Reduction`], which is either [`Sequential`] or
/// [`Distributed`] over a [`Communicator`].
///
/// The search stops when [`StronginTerminator`] sees a selected interval shorter than
/// [`StronginConfig::epsilon`] and reports the value at its right endpoint.
#[derive(Clone, Debug)]
pub struct Strongin<R = Sequential> {
    reduction: R,
    partition: Partition,
}

impl Strongin<Sequential> {
    /// Create a new [`Strongin`] algorithm which runs its reductions in-process.
    pub const fn new() -> Self {
        Self::with_reduction(Sequential)
    }
}

impl Default for Strongin<Sequential> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Communicator> Strongin<Distributed<C>> {
    /// Create a new [`Strongin`] algorithm which shares its reductions with the group of `comm`.
    pub const fn distributed(comm: C) -> Self {
        Self::with_reduction(Distributed::new(comm))
    }
}

impl<R> Strongin<R> {
    /// Create a new [`Strongin`] algorithm with the given [`Reduction`].
    pub const fn with_reduction(reduction: R) -> Self {
        Self {
            reduction,
            partition: Partition::empty(),
        }
    }

    /// The current partition of the search domain.
    pub const fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The [`Reduction`] used by the algorithm.
    pub const fn reduction(&self) -> &R {
        &self.reduction
    }
}

impl<P, U, E, R> Algorithm<P, StronginStatus, U, StronginError<E>> for Strongin<R>
where
    P: CostFunction<U, E>,
    R: Reduction,
{
    type Summary = StronginSummary;
    type Config = StronginConfig;

    fn initialize(
        &mut self,
        _problem: &P,
        status: &mut StronginStatus,
        _args: &U,
        config: &Self::Config,
    ) -> Result<(), StronginError<E>> {
        config.validate()?;
        self.partition = Partition::new(config.a, config.b);
        status.intervals = self.partition.len();
        debug!(
            rank = self.reduction.rank(),
            workers = self.reduction.workers(),
            a = config.a,
            b = config.b,
            epsilon = config.epsilon,
            "initialized search"
        );
        Ok(())
    }

    fn step(
        &mut self,
        current_step: usize,
        problem: &P,
        status: &mut StronginStatus,
        args: &U,
        config: &Self::Config,
    ) -> Result<(), StronginError<E>> {
        if let Some(previous) = status.selected.take() {
            self.partition
                .split(previous.index, previous.split_point(status.m));
        }
        let counted = Counted::new(problem);
        let lipschitz = self
            .reduction
            .lipschitz::<_, U, E>(&counted, &self.partition, args)?;
        let m = lipschitz::secondary_estimate(lipschitz, config.reliability);
        let best = self
            .reduction
            .select::<_, U, E>(&counted, &self.partition, m, args)?;
        let index = best.index.ok_or(StronginError::EmptyPartition)?;
        let interval = *self
            .partition
            .get(index)
            .ok_or(StronginError::Desynchronized {
                index,
                len: self.partition.len(),
            })?;
        let begin = Point::evaluate(&counted, interval.begin, args).map_err(StronginError::Cost)?;
        let end = Point::evaluate(&counted, interval.end, args).map_err(StronginError::Cost)?;
        debug!(
            rank = self.reduction.rank(),
            step = current_step,
            lipschitz,
            m,
            index,
            score = best.score,
            begin = interval.begin,
            end = interval.end,
            "selected interval"
        );
        status.selected = Some(Selection {
            index,
            score: best.score,
            begin,
            end,
        });
        status.lipschitz = lipschitz;
        status.m = m;
        status.intervals = self.partition.len();
        status.iteration += 1;
        status.cost_evals += counted.evals.get();
        Ok(())
    }

    fn postprocessing(
        &mut self,
        _problem: &P,
        status: &mut StronginStatus,
        _args: &U,
        _config: &Self::Config,
    ) -> Result<(), StronginError<E>> {
        if status.converged {
            info!(
                rank = self.reduction.rank(),
                iterations = status.iteration,
                x = status.best.x,
                fx = status.best.fx,
                "converged"
            );
        } else {
            warn!(
                rank = self.reduction.rank(),
                iterations = status.iteration,
                message = %status.message,
                "stopped without converging"
            );
        }
        Ok(())
    }

    fn summarize(
        &self,
        _current_step: usize,
        _problem: &P,
        status: &StronginStatus,
        _args: &U,
        config: &Self::Config,
    ) -> Result<Self::Summary, StronginError<E>> {
        let (x, fx) = if status.converged {
            status.best.destructure()
        } else {
            (Float::NAN, Float::NAN)
        };
        Ok(StronginSummary {
            bounds: config.bounds(),
            message: status.message.clone(),
            x,
            fx,
            lipschitz: status.lipschitz,
            intervals: self.partition.len(),
            iterations: status.iteration,
            cost_evals: status.cost_evals,
            workers: self.reduction.workers(),
            converged: status.converged,
        })
    }

    fn reset(&mut self) {
        self.partition = Partition::empty();
    }

    fn default_callbacks() -> Callbacks<Self, P, StronginStatus, U, StronginError<E>, Self::Config>
    where
        Self: Sized,
    {
        Callbacks::empty()
            .with_terminator(StronginTerminator)
            .with_terminator(MaxSteps::default())
    }
}

/// Stops [`Strongin`] once the selected interval is shorter than [`StronginConfig::epsilon`].
///
/// The value at the right endpoint of that interval becomes the reported minimum. The decision
/// only depends on the broadcast selection, so every worker of a group stops on the same step.
#[derive(Clone, Copy, Debug, Default)]
pub struct StronginTerminator;

impl<P, U, E, R> Terminator<Strongin<R>, P, StronginStatus, U, StronginError<E>, StronginConfig>
    for StronginTerminator
where
    P: CostFunction<U, E>,
    R: Reduction,
{
    fn check_for_termination(
        &mut self,
        _current_step: usize,
        _algorithm: &mut Strongin<R>,
        _problem: &P,
        status: &mut StronginStatus,
        _args: &U,
        config: &StronginConfig,
    ) -> ControlFlow<()> {
        if let Some(selection) = status.selected {
            if selection.length() < config.epsilon {
                status.best = selection.end;
                status.set_converged();
                status.update_message("Selected interval is shorter than epsilon");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// Minimize `func` over `[a, b]`, stopping once the selected interval is shorter than `epsilon`.
///
/// Returns the minimum found, or `NaN` if the search hit the iteration cap first.
///
/// # Errors
///
/// Returns a [`StronginError`] if the arguments are invalid.
pub fn minimize<F>(
    func: F,
    a: Float,
    b: Float,
    epsilon: Float,
) -> Result<Float, StronginError<Infallible>>
where
    F: Fn(Float) -> Float,
{
    let summary = Strongin::new().process(
        &ScalarFn(func),
        &(),
        StronginConfig::new(a, b).with_epsilon(epsilon),
        Strongin::default_callbacks(),
    )?;
    Ok(summary.fx)
}

/// Like [`minimize`], but the reductions are shared with the group of `comm`. Every worker of the
/// group must call this function with the same arguments, and every worker gets the same result.
///
/// # Errors
///
/// Returns a [`StronginError`] if the arguments are invalid or the workers cannot communicate.
pub fn minimize_distributed<C, F>(
    comm: C,
    func: F,
    a: Float,
    b: Float,
    epsilon: Float,
) -> Result<Float, StronginError<Infallible>>
where
    C: Communicator,
    F: Fn(Float) -> Float,
{
    let summary = Strongin::distributed(comm).process(
        &ScalarFn(func),
        &(),
        StronginConfig::new(a, b).with_epsilon(epsilon),
        Strongin::default_callbacks(),
    )?;
    Ok(summary.fx)
}
