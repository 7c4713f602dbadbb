use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{core::CommError, traits::Communicator};

/// The trivial group made of a single worker. Every collective is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelfCommunicator;

impl Communicator for SelfCommunicator {
    fn size(&self) -> usize {
        1
    }

    fn rank(&self) -> usize {
        0
    }

    fn send(&self, dest: usize, _payload: &[u8]) -> Result<(), CommError> {
        Err(CommError::InvalidRank {
            rank: dest,
            size: 1,
        })
    }

    fn receive(&self, source: usize) -> Result<Vec<u8>, CommError> {
        Err(CommError::InvalidRank {
            rank: source,
            size: 1,
        })
    }
}

/// One member of an in-process [`ThreadGroup`].
///
/// Every ordered pair of ranks is connected by its own FIFO channel, so messages between two
/// workers can never overtake each other.
#[derive(Debug)]
pub struct ThreadCommunicator {
    rank: usize,
    outgoing: Vec<Sender<Vec<u8>>>,
    incoming: Vec<Receiver<Vec<u8>>>,
}

impl ThreadCommunicator {
    fn check_rank(&self, rank: usize) -> Result<(), CommError> {
        if rank < self.outgoing.len() {
            Ok(())
        } else {
            Err(CommError::InvalidRank {
                rank,
                size: self.outgoing.len(),
            })
        }
    }
}

impl Communicator for ThreadCommunicator {
    fn size(&self) -> usize {
        self.outgoing.len()
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn send(&self, dest: usize, payload: &[u8]) -> Result<(), CommError> {
        self.check_rank(dest)?;
        self.outgoing[dest]
            .send(payload.to_vec())
            .map_err(|_| CommError::Disconnected { peer: dest })
    }

    fn receive(&self, source: usize) -> Result<Vec<u8>, CommError> {
        self.check_rank(source)?;
        self.incoming[source]
            .recv()
            .map_err(|_| CommError::Disconnected { peer: source })
    }
}

/// An in-process process group which runs one worker per thread.
///
/// ```rust
/// use strongin::distributed::ThreadGroup;
/// use strongin::traits::Communicator;
/// use strongin::Float;
///
/// let maxima = ThreadGroup::run(3, |comm| comm.reduce_max(comm.rank() as Float, 0).unwrap());
/// assert_eq!(maxima, vec![Some(2.0), None, None]);
/// ```
pub struct ThreadGroup;

impl ThreadGroup {
    /// Create the fully connected set of communicators for a group of `size` workers, ordered by
    /// rank.
    ///
    /// # Panics
    ///
    /// This method will panic if `size == 0`.
    pub fn communicators(size: usize) -> Vec<ThreadCommunicator> {
        assert!(size > 0, "a group needs at least one worker");
        let channels: Vec<Vec<(Sender<Vec<u8>>, Receiver<Vec<u8>>)>> = (0..size)
            .map(|_| (0..size).map(|_| unbounded()).collect())
            .collect();
        (0..size)
            .map(|rank| ThreadCommunicator {
                rank,
                outgoing: channels[rank].iter().map(|(tx, _)| tx.clone()).collect(),
                incoming: channels.iter().map(|row| row[rank].1.clone()).collect(),
            })
            .collect()
    }

    /// Run `worker` on `size` scoped threads, handing each one its own communicator, and collect
    /// the results in rank order.
    ///
    /// # Panics
    ///
    /// This method will panic if `size == 0`, and re-raises the panic of any worker.
    pub fn run<F, R>(size: usize, worker: F) -> Vec<R>
    where
        F: Fn(ThreadCommunicator) -> R + Sync,
        R: Send,
    {
        let communicators = Self::communicators(size);
        std::thread::scope(|scope| {
            let handles: Vec<_> = communicators
                .into_iter()
                .map(|comm| {
                    let worker = &worker;
                    scope.spawn(move || worker(comm))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(payload) => std::panic::resume_unwind(payload),
                })
                .collect()
        })
    }
}
