use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    algorithms::strongin::{characteristic, lipschitz, Characteristic, Interval, Partition},
    core::{CommError, StronginError},
    distributed::{wire, WorkSplitter, COORDINATOR},
    traits::{Communicator, CostFunction},
    Float,
};

/// The two per-iteration reductions of [`Strongin`](crate::algorithms::strongin::Strongin).
///
/// Both methods return a value which every worker taking part in the reduction agrees on, so that
/// each worker can apply the same split to its own copy of the [`Partition`].
pub trait Reduction {
    /// The number of workers sharing the reductions.
    fn workers(&self) -> usize;

    /// The rank of this worker.
    fn rank(&self) -> usize;

    /// The estimate $`M`$ of the Lipschitz constant over the whole partition.
    ///
    /// # Errors
    ///
    /// Returns a [`StronginError`] if an evaluation fails or the workers cannot communicate.
    fn lipschitz<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        args: &U,
    ) -> Result<Float, StronginError<E>>
    where
        P: CostFunction<U, E>;

    /// The interval with the largest characteristic over the whole partition, with its global
    /// index.
    ///
    /// # Errors
    ///
    /// Returns a [`StronginError`] if an evaluation fails or the workers cannot communicate.
    fn select<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        m: Float,
        args: &U,
    ) -> Result<Characteristic, StronginError<E>>
    where
        P: CostFunction<U, E>;
}

/// Runs both reductions in-process over the whole partition.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl Reduction for Sequential {
    fn workers(&self) -> usize {
        1
    }

    fn rank(&self) -> usize {
        COORDINATOR
    }

    fn lipschitz<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        args: &U,
    ) -> Result<Float, StronginError<E>>
    where
        P: CostFunction<U, E>,
    {
        lipschitz::estimate::<P, U, E>(problem, partition.intervals(), args)
            .map_err(StronginError::Cost)
    }

    fn select<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        m: Float,
        args: &U,
    ) -> Result<Characteristic, StronginError<E>>
    where
        P: CostFunction<U, E>,
    {
        characteristic::select::<P, U, E>(problem, partition.intervals(), m, args)
            .map_err(StronginError::Cost)
    }
}

/// Where a worker of a [`Distributed`] reduction gets its slice of the partition from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliceSource {
    /// The coordinator sends every worker its slice before each reduction.
    #[default]
    Transmit,
    /// Every worker cuts its slice out of its own replica of the partition.
    Local,
}

/// Splits both reductions over the workers of a [`Communicator`].
///
/// The partition is divided into contiguous slices with a [`WorkSplitter`]. Workers without a
/// slice still enter every collective, contributing `0` to the Lipschitz estimate and nothing to
/// the selection.
#[derive(Clone, Debug)]
pub struct Distributed<C> {
    comm: C,
    slice_source: SliceSource,
}

impl<C: Communicator> Distributed<C> {
    /// Create a new [`Distributed`] reduction over the group of `comm`.
    pub const fn new(comm: C) -> Self {
        Self {
            comm,
            slice_source: SliceSource::Transmit,
        }
    }

    /// Set where workers get their slices from (default = [`SliceSource::Transmit`]).
    pub const fn with_slice_source(mut self, slice_source: SliceSource) -> Self {
        self.slice_source = slice_source;
        self
    }

    /// The underlying communicator.
    pub const fn communicator(&self) -> &C {
        &self.comm
    }

    /// The configured [`SliceSource`].
    pub const fn slice_source(&self) -> SliceSource {
        self.slice_source
    }

    fn local_slice<'a>(
        &self,
        partition: &'a [Interval],
        splitter: &WorkSplitter,
    ) -> Result<Cow<'a, [Interval]>, CommError> {
        let rank = self.comm.rank();
        match self.slice_source {
            SliceSource::Local => Ok(Cow::Borrowed(&partition[splitter.range(rank)])),
            SliceSource::Transmit if rank == COORDINATOR => {
                for worker in (0..splitter.workers()).filter(|&worker| worker != COORDINATOR) {
                    let range = splitter.range(worker);
                    if range.is_empty() {
                        continue;
                    }
                    trace!(worker, start = range.start, len = range.len(), "sending slice");
                    self.comm
                        .send(worker, &wire::encode_intervals(&partition[range]))?;
                }
                Ok(Cow::Borrowed(&partition[splitter.range(COORDINATOR)]))
            }
            SliceSource::Transmit => match splitter.part_work(rank) {
                0 => Ok(Cow::Borrowed(&[])),
                work => {
                    let slice = wire::decode_intervals(&self.comm.receive(COORDINATOR)?, work)?;
                    Ok(Cow::Owned(slice))
                }
            },
        }
    }
}

impl<C: Communicator> Reduction for Distributed<C> {
    fn workers(&self) -> usize {
        self.comm.size()
    }

    fn rank(&self) -> usize {
        self.comm.rank()
    }

    fn lipschitz<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        args: &U,
    ) -> Result<Float, StronginError<E>>
    where
        P: CostFunction<U, E>,
    {
        let splitter = WorkSplitter::new(partition.len(), self.comm.size());
        let local = self.local_slice(partition.intervals(), &splitter)?;
        let partial =
            lipschitz::estimate::<P, U, E>(problem, &local, args).map_err(StronginError::Cost)?;
        let reduced = self.comm.reduce_max(partial, COORDINATOR)?;
        let mut buffer = reduced.map(wire::encode_float).unwrap_or_default();
        self.comm.broadcast(&mut buffer, COORDINATOR)?;
        Ok(wire::decode_float(&buffer)?)
    }

    fn select<P, U, E>(
        &self,
        problem: &P,
        partition: &Partition,
        m: Float,
        args: &U,
    ) -> Result<Characteristic, StronginError<E>>
    where
        P: CostFunction<U, E>,
    {
        let splitter = WorkSplitter::new(partition.len(), self.comm.size());
        let local = self.local_slice(partition.intervals(), &splitter)?;
        let local_best = characteristic::select::<P, U, E>(problem, &local, m, args)
            .map_err(StronginError::Cost)?;
        let rank = self.comm.rank();
        let mut buffer = if rank == COORDINATOR {
            let mut records = vec![Characteristic::none(); splitter.workers()];
            records[COORDINATOR] = local_best;
            for worker in (0..splitter.workers()).filter(|&worker| worker != COORDINATOR) {
                if splitter.part_work(worker) > 0 {
                    records[worker] = wire::decode_characteristic(&self.comm.receive(worker)?)?;
                }
            }
            let global = best_global(&records, &splitter);
            trace!(score = global.score, index = ?global.index, "selected globally");
            wire::encode_characteristic(&global)
        } else {
            if splitter.part_work(rank) > 0 {
                self.comm
                    .send(COORDINATOR, &wire::encode_characteristic(&local_best))?;
            }
            Vec::new()
        };
        self.comm.broadcast(&mut buffer, COORDINATOR)?;
        Ok(wire::decode_characteristic(&buffer)?)
    }
}

fn best_global(records: &[Characteristic], splitter: &WorkSplitter) -> Characteristic {
    characteristic::best_of(records).map_or_else(Characteristic::none, |winner| {
        records[winner].offset(splitter.prev_part_work(winner))
    })
}
