use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A reactive value that notifies watchers when changed.
///
/// Clones share the same value. Watchers run in subscription order, on
/// the thread that performed the write; they must not write back into the
/// signal they watch.
///
/// # Examples
///
/// ```
/// use motif::Signal;
///
/// let count = Signal::new(0);
/// assert_eq!(count.get(), 0);
///
/// count.set(42);
/// assert_eq!(count.get(), 42);
///
/// count.update(|n| *n += 10);
/// assert_eq!(count.get(), 52);
/// ```
#[derive(Clone)]
pub struct Signal<T> {
    value: Arc<RwLock<T>>,
    watchers: Arc<Mutex<Vec<(usize, Callback<T>)>>>,
    next_watcher: Arc<AtomicUsize>,
}

impl<T: Send + Sync + 'static> Signal<T> {
    /// Create a new signal with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            watchers: Arc::new(Mutex::new(Vec::new())),
            next_watcher: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set a new value for the signal.
    pub fn set(&self, new_value: T) {
        *self.value.write().unwrap() = new_value;
        self.notify();
    }

    /// Update the value using a function.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.value.write().unwrap();
        f(&mut *value);
        drop(value); // Release the write lock before notifying
        self.notify();
    }

    /// Read the value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.value.read().unwrap();
        f(&*value)
    }

    /// Watch this signal for changes.
    ///
    /// The callback is invoked immediately with the current value and
    /// again after every write. Dropping the returned guard unsubscribes.
    pub fn watch<F>(&self, callback: F) -> WatchGuard
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.next_watcher.fetch_add(1, Ordering::SeqCst);
        let callback: Callback<T> = Arc::new(callback);
        self.watchers
            .lock()
            .unwrap()
            .push((id, Arc::clone(&callback)));

        // Call immediately with the current value
        {
            let value = self.value.read().unwrap();
            callback(&value);
        }

        let watchers = Arc::downgrade(&self.watchers);
        WatchGuard {
            unsubscribe: Some(Box::new(move || {
                if let Some(watchers) = watchers.upgrade() {
                    watchers
                        .lock()
                        .unwrap()
                        .retain(|(watcher_id, _)| *watcher_id != id);
                }
            })),
        }
    }

    /// Notify all watchers of the current value, in subscription order.
    fn notify(&self) {
        let watchers: Vec<Callback<T>> = self
            .watchers
            .lock()
            .unwrap()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        let value = self.value.read().unwrap();
        for watcher in watchers {
            watcher(&value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Signal<T> {
    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }
}

/// RAII guard for signal watchers.
pub struct WatchGuard {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
