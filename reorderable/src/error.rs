use thiserror::Error;

use crate::ItemId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("item {0} is not in the list")]
    UnknownItem(ItemId),
    #[error("target index {target} is out of range for a list of {len} items")]
    TargetOutOfRange { target: usize, len: usize },
    /// The registry no longer mirrors the list after a commit.
    ///
    /// This is an internal-consistency fault: the host registered fewer (or other) items than it
    /// lists. The controller tears the drag session down before reporting it.
    #[error("registry tracks {registry} elements but the list holds {list} items")]
    RegistryOutOfSync { registry: usize, list: usize },
}
