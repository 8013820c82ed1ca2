use crate::signal::Signal;

/// Snapshot-and-restore capability for a piece of state.
///
/// The caretaker role stays with the caller: it decides when to capture
/// a memento and holds on to it for as long as a restore might happen.
///
/// # Examples
///
/// Every `Signal` over clonable state is an originator:
///
/// ```
/// use motif::{Originator, Signal};
///
/// let mut count = Signal::new(3);
/// let memento = count.save();
///
/// count.set(42);
/// count.restore(&memento);
/// assert_eq!(count.get(), 3);
/// ```
pub trait Originator {
    /// The captured state.
    type Memento;

    /// Capture the current state.
    fn save(&self) -> Self::Memento;

    /// Replace the current state with a previously captured one.
    ///
    /// The memento is taken by reference so the caretaker can restore
    /// the same snapshot more than once.
    fn restore(&mut self, memento: &Self::Memento);
}

impl<T: Clone + Send + Sync + 'static> Originator for Signal<T> {
    type Memento = T;

    fn save(&self) -> T {
        self.get()
    }

    fn restore(&mut self, memento: &T) {
        self.set(memento.clone());
    }
}
