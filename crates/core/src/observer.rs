/// Receives solver events as the iteration proceeds.
///
/// Observers let callers monitor a solver without changing its API, enabling
/// logging, progress reporting, or collecting extra diagnostics. They are
/// read-only: a solver never consults an observer to decide what to do next.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
