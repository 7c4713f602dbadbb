use crate::{core::CommError, distributed::wire, Float};

/// A fixed-size group of cooperating workers which only share data by passing messages.
///
/// Workers are identified by their rank in `0..size()`. Messages between any ordered pair of
/// ranks must be delivered in the order they were sent, and every operation blocks until the
/// data it needs has arrived. Implementors only have to provide the point-to-point primitives:
/// [`Communicator::reduce_max`] and [`Communicator::broadcast`] have default implementations
/// built on top of them.
///
/// Collective operations must be entered by every worker of the group, in the same order.
pub trait Communicator {
    /// The number of workers in the group.
    fn size(&self) -> usize;

    /// The rank of this worker within the group.
    fn rank(&self) -> usize;

    /// Send a binary payload to the worker with rank `dest`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommError`] if `dest` is not a valid rank or the destination has gone away.
    fn send(&self, dest: usize, payload: &[u8]) -> Result<(), CommError>;

    /// Block until the next payload sent by the worker with rank `source` arrives.
    ///
    /// # Errors
    ///
    /// Returns a [`CommError`] if `source` is not a valid rank or the source has gone away.
    fn receive(&self, source: usize) -> Result<Vec<u8>, CommError>;

    /// Returns `true` if this worker has rank `root`.
    fn is_root(&self, root: usize) -> bool {
        self.rank() == root
    }

    /// Combine `value` from every worker with a maximum. The result is only defined on `root`,
    /// which receives `Some(max)`; every other worker receives `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommError`] if any of the underlying messages cannot be delivered or decoded.
    fn reduce_max(&self, value: Float, root: usize) -> Result<Option<Float>, CommError> {
        if self.is_root(root) {
            let mut result = value;
            for source in (0..self.size()).filter(|&source| source != root) {
                let partial = wire::decode_float(&self.receive(source)?)?;
                if partial > result {
                    result = partial;
                }
            }
            Ok(Some(result))
        } else {
            self.send(root, &wire::encode_float(value))?;
            Ok(None)
        }
    }

    /// Copy `buffer` from `root` into `buffer` on every other worker.
    ///
    /// # Errors
    ///
    /// Returns a [`CommError`] if any of the underlying messages cannot be delivered.
    fn broadcast(&self, buffer: &mut Vec<u8>, root: usize) -> Result<(), CommError> {
        if self.is_root(root) {
            for dest in (0..self.size()).filter(|&dest| dest != root) {
                self.send(dest, buffer)?;
            }
        } else {
            *buffer = self.receive(root)?;
        }
        Ok(())
    }
}

impl<C> Communicator for &C
where
    C: Communicator + ?Sized,
{
    fn size(&self) -> usize {
        (**self).size()
    }

    fn rank(&self) -> usize {
        (**self).rank()
    }

    fn send(&self, dest: usize, payload: &[u8]) -> Result<(), CommError> {
        (**self).send(dest, payload)
    }

    fn receive(&self, source: usize) -> Result<Vec<u8>, CommError> {
        (**self).receive(source)
    }

    fn reduce_max(&self, value: Float, root: usize) -> Result<Option<Float>, CommError> {
        (**self).reduce_max(value, root)
    }

    fn broadcast(&self, buffer: &mut Vec<u8>, root: usize) -> Result<(), CommError> {
        (**self).broadcast(buffer, root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributed::SelfCommunicator;

    #[test]
    fn test_reference_forwarding() {
        let comm = SelfCommunicator;
        let by_ref = &comm;
        assert_eq!(by_ref.size(), 1);
        assert!(by_ref.is_root(0));
    }
}
