use thiserror::Error;

use super::document::{ContainerId, NodeId};

/// Errors raised by the host surface.
///
/// These are integration errors. The component layer does not catch or
/// retry them; they propagate to whoever drove the mount or unmount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The container was already removed from the document.
    #[error("container {0:?} is already detached")]
    ContainerDetached(ContainerId),

    /// The node does not exist in the given container.
    #[error("node {node:?} not found in container {container:?}")]
    NodeNotFound {
        /// Container that was addressed
        container: ContainerId,
        /// Node that could not be found
        node: NodeId,
    },
}
