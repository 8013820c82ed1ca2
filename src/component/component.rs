use std::sync::Arc;

use crate::host::{ContainerId, Document, HostError, NodeId};
use crate::runtime::UiRuntime;
use crate::signal::{Signal, WatchGuard};

/// A declarative unit that can be mounted on the host surface.
///
/// Components are value-like: `view` runs once per mount point, and all
/// per-instance state is created inside it, typically as [`Signal`]s
/// moved into the scope's bindings and handlers. Remounting a component
/// therefore always starts from fresh state.
pub trait Component: Send + Sync + 'static {
    /// Configuration supplied by the call site at mount time.
    type Props: Clone + Send + Sync + 'static;

    /// Render into the scope's container and register lifecycle hooks.
    fn view(&self, scope: &mut Scope, props: Self::Props) -> Result<(), HostError>;
}

/// Per-mount rendering context.
///
/// A scope is tied to one container for the duration of one `view` call.
/// It collects the nodes the component renders, the activation handlers
/// it registers (the headless stand-in for click), and the cleanups to
/// run at unmount.
pub struct Scope {
    document: Document,
    container: ContainerId,
    nodes: Vec<NodeId>,
    cleanups: Vec<Box<dyn FnOnce() + Send>>,
    activations: Vec<Arc<dyn Fn() + Send + Sync>>,
    guards: Vec<WatchGuard>,
}

impl Scope {
    fn new(document: Document, container: ContainerId) -> Self {
        Self {
            document,
            container,
            nodes: Vec::new(),
            cleanups: Vec::new(),
            activations: Vec::new(),
            guards: Vec::new(),
        }
    }

    /// Handle to the host surface this scope renders into.
    pub fn document(&self) -> Document {
        self.document.clone()
    }

    /// The container this scope renders into.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Append a text node to the scope's container.
    pub fn text(&mut self, text: impl Into<String>) -> Result<NodeId, HostError> {
        let node = self.document.push_text(self.container, text)?;
        self.nodes.push(node);
        Ok(node)
    }

    /// Append a text node whose content follows a signal.
    ///
    /// The node is kept up to date for as long as the mount lives; the
    /// watcher is dropped at unmount.
    pub fn bind<T, F>(&mut self, signal: &Signal<T>, render: F) -> Result<NodeId, HostError>
    where
        T: Send + Sync + 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let node = self.text(signal.with(|value| render(value)))?;
        let document = self.document.clone();
        let container = self.container;
        let guard = signal.watch(move |value| {
            if let Err(err) = document.set_text(container, node, render(value)) {
                log::warn!("Dropped update for stale binding: {}", err);
            }
        });
        self.guards.push(guard);
        Ok(node)
    }

    /// Register an activation handler.
    ///
    /// Handlers fire in registration order when the call site invokes
    /// [`MountHandle::activate`].
    pub fn on_activate(&mut self, handler: impl Fn() + Send + Sync + 'static) {
        self.activations.push(Arc::new(handler));
    }

    /// Register a cleanup paired with this mount.
    ///
    /// Cleanups run exactly once per unmount, in registration order,
    /// before the rendered nodes are removed.
    pub fn on_cleanup(&mut self, cleanup: impl FnOnce() + Send + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }
}

/// Mount a component on the current runtime's document.
///
/// A fresh container is attached for this call site; the returned handle
/// owns it and detaches it at unmount.
pub fn mount<C>(component: &C, props: C::Props) -> Result<MountHandle, HostError>
where
    C: Component + ?Sized,
{
    let document = UiRuntime::current().document();
    mount_in(&document, component, props)
}

/// Mount a component on an explicit document.
pub fn mount_in<C>(
    document: &Document,
    component: &C,
    props: C::Props,
) -> Result<MountHandle, HostError>
where
    C: Component + ?Sized,
{
    let container = document.create_container();
    match run_view(document, container, true, component, props) {
        Ok(handle) => Ok(handle),
        Err(err) => {
            let _ = document.remove_container(container);
            Err(err)
        }
    }
}

/// Mount a component into an existing container.
///
/// The handle does not own the container: unmounting removes only the
/// nodes this mount created and leaves the container attached. Used when
/// one component hosts another, as the singleton wrapper and the wizard
/// do.
pub fn mount_into<C>(
    document: &Document,
    container: ContainerId,
    component: &C,
    props: C::Props,
) -> Result<MountHandle, HostError>
where
    C: Component + ?Sized,
{
    run_view(document, container, false, component, props)
}

fn run_view<C>(
    document: &Document,
    container: ContainerId,
    owns_container: bool,
    component: &C,
    props: C::Props,
) -> Result<MountHandle, HostError>
where
    C: Component + ?Sized,
{
    let mut scope = Scope::new(document.clone(), container);
    if let Err(err) = component.view(&mut scope, props) {
        // A failing view may already have mounted children; the
        // cleanups registered so far still run.
        for cleanup in scope.cleanups.drain(..) {
            cleanup();
        }
        return Err(err);
    }
    Ok(MountHandle {
        document: scope.document,
        container: scope.container,
        nodes: scope.nodes,
        cleanups: scope.cleanups,
        activations: scope.activations,
        _guards: scope.guards,
        owns_container,
        done: false,
    })
}

/// A live mount point.
///
/// Dropping the handle unmounts best-effort; [`MountHandle::unmount`]
/// does the same but surfaces host errors to the caller.
pub struct MountHandle {
    document: Document,
    container: ContainerId,
    nodes: Vec<NodeId>,
    cleanups: Vec<Box<dyn FnOnce() + Send>>,
    activations: Vec<Arc<dyn Fn() + Send + Sync>>,
    _guards: Vec<WatchGuard>,
    owns_container: bool,
    done: bool,
}

impl MountHandle {
    /// The container this mount rendered into.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// Fire the mount's activation handlers, in registration order.
    pub fn activate(&self) {
        for handler in &self.activations {
            handler();
        }
    }

    /// Snapshot of the activation handlers, for forwarding without
    /// holding a lock across the calls.
    pub(crate) fn activation_handlers(&self) -> Vec<Arc<dyn Fn() + Send + Sync>> {
        self.activations.clone()
    }

    /// Unmount: run cleanups, drop live bindings, remove rendered output.
    pub fn unmount(mut self) -> Result<(), HostError> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<(), HostError> {
        if self.done {
            return Ok(());
        }
        self.done = true;

        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        self._guards.clear();
        self.activations.clear();

        if self.owns_container {
            self.nodes.clear();
            self.document.remove_container(self.container)
        } else {
            for node in self.nodes.drain(..) {
                self.document.remove_node(self.container, node)?;
            }
            Ok(())
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        if let Err(err) = self.teardown() {
            log::warn!("Unmount during drop failed: {}", err);
        }
    }
}
