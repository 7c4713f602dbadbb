/// In-process implementations of [`Communicator`](crate::traits::Communicator).
pub mod group;
/// Binary encodings for messages exchanged between workers.
pub mod wire;
/// [`WorkSplitter`] for dividing contiguous work over a group.
pub mod work_splitter;

pub use group::{SelfCommunicator, ThreadCommunicator, ThreadGroup};
pub use work_splitter::WorkSplitter;

/// The rank which coordinates every collective operation.
pub const COORDINATOR: usize = 0;
