use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::HostError;

/// Identifier of a container attached to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

/// Identifier of a text node within a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Container {
    nodes: Vec<(NodeId, String)>,
}

struct DocumentInner {
    containers: HashMap<ContainerId, Container>,
    // Attach order, used when rendering the whole surface
    order: Vec<ContainerId>,
    next_container: usize,
    next_node: usize,
}

/// A mutable host surface that rendered output attaches to.
///
/// Handles are cheap to clone and share the same surface. All operations
/// take the lock briefly; nothing user-supplied runs under it.
///
/// # Examples
///
/// ```
/// use motif::Document;
///
/// let document = Document::new();
/// let container = document.create_container();
/// document.push_text(container, "hello").unwrap();
///
/// assert_eq!(document.body_text(), "hello");
///
/// document.remove_container(container).unwrap();
/// assert_eq!(document.body_text(), "");
/// ```
#[derive(Clone)]
pub struct Document {
    inner: Arc<Mutex<DocumentInner>>,
}

impl Document {
    /// Create a new, empty document.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DocumentInner {
                containers: HashMap::new(),
                order: Vec::new(),
                next_container: 0,
                next_node: 0,
            })),
        }
    }

    /// Create a container and attach it at the end of the document.
    pub fn create_container(&self) -> ContainerId {
        let mut inner = self.inner.lock().unwrap();
        let id = ContainerId(inner.next_container);
        inner.next_container += 1;
        inner.containers.insert(id, Container { nodes: Vec::new() });
        inner.order.push(id);
        id
    }

    /// Detach a container and discard its contents.
    ///
    /// Removing a container that was already detached is an integration
    /// error and returns [`HostError::ContainerDetached`].
    pub fn remove_container(&self, id: ContainerId) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.containers.remove(&id).is_none() {
            return Err(HostError::ContainerDetached(id));
        }
        inner.order.retain(|container| *container != id);
        Ok(())
    }

    /// Whether the container is currently attached.
    pub fn is_attached(&self, id: ContainerId) -> bool {
        self.inner.lock().unwrap().containers.contains_key(&id)
    }

    /// Append a text node to a container.
    pub fn push_text(
        &self,
        container: ContainerId,
        text: impl Into<String>,
    ) -> Result<NodeId, HostError> {
        let mut inner = self.inner.lock().unwrap();
        let node = NodeId(inner.next_node);
        inner.next_node += 1;
        let entry = inner
            .containers
            .get_mut(&container)
            .ok_or(HostError::ContainerDetached(container))?;
        entry.nodes.push((node, text.into()));
        Ok(node)
    }

    /// Replace the content of an existing text node.
    pub fn set_text(
        &self,
        container: ContainerId,
        node: NodeId,
        text: impl Into<String>,
    ) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();
        let entry = inner
            .containers
            .get_mut(&container)
            .ok_or(HostError::ContainerDetached(container))?;
        let slot = entry
            .nodes
            .iter_mut()
            .find(|(id, _)| *id == node)
            .ok_or(HostError::NodeNotFound { container, node })?;
        slot.1 = text.into();
        Ok(())
    }

    /// Remove a text node from a container.
    pub fn remove_node(&self, container: ContainerId, node: NodeId) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();
        let entry = inner
            .containers
            .get_mut(&container)
            .ok_or(HostError::ContainerDetached(container))?;
        let before = entry.nodes.len();
        entry.nodes.retain(|(id, _)| *id != node);
        if entry.nodes.len() == before {
            return Err(HostError::NodeNotFound { container, node });
        }
        Ok(())
    }

    /// The text of one container, one line per node.
    pub fn container_text(&self, container: ContainerId) -> Result<String, HostError> {
        let inner = self.inner.lock().unwrap();
        let entry = inner
            .containers
            .get(&container)
            .ok_or(HostError::ContainerDetached(container))?;
        Ok(entry
            .nodes
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// The text of the whole surface, containers in attach order.
    pub fn body_text(&self) -> String {
        let inner = self.inner.lock().unwrap();
        let mut lines = Vec::new();
        for id in &inner.order {
            if let Some(container) = inner.containers.get(id) {
                for (_, text) in &container.nodes {
                    lines.push(text.as_str());
                }
            }
        }
        lines.join("\n")
    }

    /// Number of currently attached containers.
    pub fn container_count(&self) -> usize {
        self.inner.lock().unwrap().containers.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
