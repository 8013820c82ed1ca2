use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

use crate::host::Document;

/// Ambient UI runtime owning the host surface.
///
/// Supports both a global runtime (default) and scoped runtimes for
/// isolation. Lifecycle notifications (a component's render and its
/// paired cleanup) run serially on the thread that drives the mount or
/// unmount; the runtime relies on that serialization and adds no
/// scheduling of its own. State shared between mount points must carry
/// its own mutex if the host drives them from several threads.
///
/// # Examples
///
/// Using the default global runtime:
///
/// ```
/// use motif::runtime::UiRuntime;
///
/// let document = UiRuntime::current().document();
/// ```
///
/// Using scoped runtimes for isolation:
///
/// ```
/// use motif::runtime::UiRuntime;
///
/// UiRuntime::scope(|| {
///     let document = UiRuntime::current().document();
///     assert_eq!(document.container_count(), 0);
/// });
/// // The scoped document is dropped here
/// ```
pub struct UiRuntime {
    document: Document,
}

// Thread-local stack for scoped runtimes
thread_local! {
    static RUNTIME_STACK: RefCell<Vec<Arc<UiRuntime>>> = RefCell::new(vec![]);
}

impl UiRuntime {
    /// Create a new isolated runtime with an empty document.
    fn new() -> Arc<Self> {
        Arc::new(UiRuntime {
            document: Document::new(),
        })
    }

    /// Run a function with a fresh isolated runtime.
    ///
    /// Useful for tests and demos that must not see each other's
    /// containers. The runtime and its document are dropped when the
    /// function returns.
    pub fn scope<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let runtime = Self::new();
        Self::with_runtime(runtime, f)
    }

    /// Get or create the global runtime (fallback).
    pub fn global() -> Arc<Self> {
        static RUNTIME: OnceLock<Arc<UiRuntime>> = OnceLock::new();
        Arc::clone(RUNTIME.get_or_init(Self::new))
    }

    /// Get the current runtime (scoped or global fallback).
    pub fn current() -> Arc<Self> {
        RUNTIME_STACK.with(|stack| {
            stack
                .borrow()
                .last()
                .cloned()
                .unwrap_or_else(Self::global)
        })
    }

    /// Run a function with a specific runtime as the current context.
    pub fn with_runtime<F, R>(runtime: Arc<Self>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        RUNTIME_STACK.with(|stack| {
            stack.borrow_mut().push(runtime);
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

        RUNTIME_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });

        match result {
            Ok(r) => r,
            Err(e) => std::panic::resume_unwind(e),
        }
    }

    /// Handle to this runtime's host surface.
    pub fn document(&self) -> Document {
        self.document.clone()
    }
}
