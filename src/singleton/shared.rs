use std::sync::{Arc, Mutex};

use crate::component::{mount_into, Component, MountHandle, Scope};
use crate::host::{ContainerId, Document, HostError};

/// Bookkeeping shared by every call site of one wrapped unit.
///
/// Invariant: `backing` is present if and only if `ref_count > 0`.
struct WrapperState {
    ref_count: usize,
    backing: Option<Backing>,
}

/// The single live instance behind all call sites: a detached container
/// on the first mounter's document, plus the mount rendered into it.
struct Backing {
    document: Document,
    container: ContainerId,
    handle: MountHandle,
}

/// A component wrapper that multiplexes all of its mount points onto one
/// backing instance.
///
/// The wrapper renders nothing at its own mount position. On the first
/// mount it creates a dedicated container on the document, renders the
/// wrapped unit into it with that call site's props, and keeps it alive
/// until the last mount point goes away. Later call sites only bump the
/// reference count; their props are ignored, so only the first mounter's
/// configuration takes effect. Activating any call site's handle fires
/// the backing instance's activation handlers.
///
/// Clones share the same reference count, so one `Shared` value (or its
/// clones) is one logical instance no matter how often it is mounted.
///
/// # Examples
///
/// ```
/// use motif::{mount_in, shared, Component, Document, HostError, Scope};
///
/// struct Banner;
///
/// impl Component for Banner {
///     type Props = String;
///
///     fn view(&self, scope: &mut Scope, text: String) -> Result<(), HostError> {
///         scope.text(text)?;
///         Ok(())
///     }
/// }
///
/// let banner = shared(Banner);
/// let document = Document::new();
///
/// let first = mount_in(&document, &banner, "hello".to_string()).unwrap();
/// let second = mount_in(&document, &banner, "ignored".to_string()).unwrap();
/// assert_eq!(banner.ref_count(), 2);
/// assert_eq!(document.body_text(), "hello");
///
/// second.unmount().unwrap();
/// first.unmount().unwrap();
/// assert_eq!(banner.ref_count(), 0);
/// assert_eq!(document.body_text(), "");
/// ```
pub struct Shared<C: Component> {
    unit: Arc<C>,
    state: Arc<Mutex<WrapperState>>,
}

impl<C: Component> Shared<C> {
    /// Wrap a unit. Pure; nothing happens until the wrapper is mounted.
    pub fn new(unit: C) -> Self {
        Self {
            unit: Arc::new(unit),
            state: Arc::new(Mutex::new(WrapperState {
                ref_count: 0,
                backing: None,
            })),
        }
    }

    /// Number of currently mounted call sites.
    pub fn ref_count(&self) -> usize {
        self.state.lock().unwrap().ref_count
    }
}

impl<C: Component> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self {
            unit: Arc::clone(&self.unit),
            state: Arc::clone(&self.state),
        }
    }
}

/// Wrap a unit in a [`Shared`] lifecycle.
pub fn shared<C: Component>(unit: C) -> Shared<C> {
    Shared::new(unit)
}

impl<C: Component> Component for Shared<C> {
    type Props = C::Props;

    fn view(&self, scope: &mut Scope, props: Self::Props) -> Result<(), HostError> {
        let document = scope.document();

        let mut state = self.state.lock().unwrap();
        if state.ref_count == 0 {
            // First call site: attach a dedicated container and render
            // the unit into it with this call site's props.
            let container = document.create_container();
            let handle = match mount_into(&document, container, &*self.unit, props) {
                Ok(handle) => handle,
                Err(err) => {
                    let _ = document.remove_container(container);
                    return Err(err);
                }
            };
            state.backing = Some(Backing {
                document: document.clone(),
                container,
                handle,
            });
        }
        state.ref_count += 1;
        log::info!("Mounted singleton instance, ref count is {}.", state.ref_count);
        drop(state);

        // Activations at any call site reach the one backing instance.
        // Snapshot the handlers under the lock and fire outside it, so a
        // handler may call back into the wrapper.
        let state = Arc::clone(&self.state);
        scope.on_activate(move || {
            let handlers = {
                let state = state.lock().unwrap();
                match &state.backing {
                    Some(backing) => backing.handle.activation_handlers(),
                    None => return,
                }
            };
            for handler in &handlers {
                handler();
            }
        });

        let state = Arc::clone(&self.state);
        scope.on_cleanup(move || {
            let mut state = state.lock().unwrap();
            if state.ref_count == 1 {
                // Last call site: tear the backing instance down on the
                // document that hosts it.
                if let Some(Backing {
                    document,
                    container,
                    handle,
                }) = state.backing.take()
                {
                    if let Err(err) = handle.unmount() {
                        log::warn!("Singleton instance teardown failed: {}", err);
                    }
                    if let Err(err) = document.remove_container(container) {
                        log::warn!("Singleton container detach failed: {}", err);
                    }
                }
            }
            state.ref_count -= 1;
            log::info!(
                "Unmounted singleton instance, ref count is {}.",
                state.ref_count
            );
        });

        Ok(())
    }
}
