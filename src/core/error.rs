use thiserror::Error;

use crate::Float;

/// Errors raised by a [`Communicator`](crate::traits::Communicator) while moving messages between
/// workers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommError {
    /// The peer on the other side of a channel has gone away.
    #[error("rank {peer} disconnected")]
    Disconnected {
        /// The rank which could not be reached.
        peer: usize,
    },
    /// A rank outside of `0..size` was addressed.
    #[error("rank {rank} is out of range for a group of size {size}")]
    InvalidRank {
        /// The offending rank.
        rank: usize,
        /// The size of the group.
        size: usize,
    },
    /// A message did not have the layout expected by the receiver.
    #[error("malformed {what} payload: expected {expected} bytes, got {actual}")]
    Malformed {
        /// A short name for the kind of payload.
        what: &'static str,
        /// The number of bytes the receiver expected.
        expected: usize,
        /// The number of bytes actually received.
        actual: usize,
    },
    /// A message was encoded with a layout version this build does not understand.
    #[error("unsupported {what} payload version {version}")]
    UnsupportedVersion {
        /// A short name for the kind of payload.
        what: &'static str,
        /// The version tag found in the payload.
        version: u8,
    },
}

/// The error type returned by the [`Strongin`](crate::algorithms::strongin::Strongin) algorithm.
///
/// The generic `E` is the error type of the [`CostFunction`](crate::traits::CostFunction) being
/// minimized, which is [`std::convert::Infallible`] for most functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StronginError<E> {
    /// The search interval does not satisfy `a < b` with finite bounds.
    #[error("invalid search interval [{a}, {b}]: bounds must be finite and satisfy a < b")]
    InvalidInterval {
        /// Lower end of the search interval.
        a: Float,
        /// Upper end of the search interval.
        b: Float,
    },
    /// The convergence tolerance is not strictly positive.
    #[error("invalid tolerance {0}: epsilon must be positive")]
    InvalidTolerance(Float),
    /// The reliability constant is not strictly greater than one.
    #[error("invalid reliability {0}: r must be greater than 1")]
    InvalidReliability(Float),
    /// A characteristic was requested for a partition with no intervals.
    #[error("cannot select an interval from an empty partition")]
    EmptyPartition,
    /// The selected interval does not exist in this worker's copy of the partition, which means
    /// the replicas have diverged.
    #[error("selected interval {index} does not exist in a partition of {len} intervals (replicas diverged)")]
    Desynchronized {
        /// The global index that was selected.
        index: usize,
        /// The number of intervals in the local partition.
        len: usize,
    },
    /// Message passing between workers failed.
    #[error("communication failed: {0}")]
    Communication(#[from] CommError),
    /// The cost function returned an error.
    #[error("cost function evaluation failed: {0:?}")]
    Cost(E),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{convert::Infallible, error::Error as _};

    #[test]
    fn test_display_messages() {
        let err: StronginError<Infallible> = StronginError::InvalidInterval { a: 2.0, b: 1.0 };
        assert_eq!(
            err.to_string(),
            "invalid search interval [2, 1]: bounds must be finite and satisfy a < b"
        );
        let err: StronginError<&str> = StronginError::Cost("boom");
        assert_eq!(err.to_string(), "cost function evaluation failed: \"boom\"");
        let err: StronginError<Infallible> = CommError::Disconnected { peer: 3 }.into();
        assert_eq!(err.to_string(), "communication failed: rank 3 disconnected");
    }

    #[test]
    fn test_communication_source() {
        let err: StronginError<Infallible> = CommError::InvalidRank { rank: 4, size: 2 }.into();
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("rank 4 is out of range for a group of size 2")
        );
    }

    #[test]
    fn test_debug_only_cost_error() {
        #[derive(Debug)]
        struct Opaque;
        let err: Box<dyn std::error::Error> = Box::new(StronginError::Cost(Opaque));
        assert_eq!(err.to_string(), "cost function evaluation failed: Opaque");
        assert!(err.source().is_none());
        let err: StronginError<Opaque> = StronginError::Desynchronized { index: 5, len: 1 };
        assert_eq!(
            err.to_string(),
            "selected interval 5 does not exist in a partition of 1 intervals (replicas diverged)"
        );
    }
}
