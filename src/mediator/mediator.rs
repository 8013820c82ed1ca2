use std::sync::{Arc, Mutex};

/// A capability the mediator can invoke on a registered colleague.
///
/// Any `Fn() + Send + Sync` closure is a participant.
pub trait Participant: Send + Sync {
    fn apply(&self);
}

impl<F: Fn() + Send + Sync> Participant for F {
    fn apply(&self) {
        self()
    }
}

/// Routes one broadcast to every registered participant.
///
/// Participants are applied in registration order. Handles are cheap to
/// clone and share the same registry.
///
/// # Examples
///
/// ```
/// use motif::Mediator;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let mediator = Mediator::new();
/// let hits = Arc::new(AtomicUsize::new(0));
///
/// for _ in 0..3 {
///     let hits = Arc::clone(&hits);
///     mediator.register(move || {
///         hits.fetch_add(1, Ordering::SeqCst);
///     });
/// }
///
/// mediator.broadcast();
/// assert_eq!(hits.load(Ordering::SeqCst), 3);
/// ```
#[derive(Clone)]
pub struct Mediator {
    participants: Arc<Mutex<Vec<Arc<dyn Participant>>>>,
}

impl Mediator {
    /// Create a mediator with no participants.
    pub fn new() -> Self {
        Self {
            participants: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a participant. Registration order is broadcast order.
    pub fn register(&self, participant: impl Participant + 'static) {
        self.participants
            .lock()
            .unwrap()
            .push(Arc::new(participant));
    }

    /// Apply every participant, in registration order.
    ///
    /// The registry is snapshotted first, so a participant may register
    /// further participants without deadlocking; they join the next
    /// broadcast.
    pub fn broadcast(&self) {
        let participants: Vec<Arc<dyn Participant>> =
            self.participants.lock().unwrap().clone();
        for participant in participants {
            participant.apply();
        }
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.participants.lock().unwrap().len()
    }

    /// Whether no participants are registered.
    pub fn is_empty(&self) -> bool {
        self.participants.lock().unwrap().is_empty()
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new()
    }
}
