use super::*;

/// Returned by ObserverList::add(), used instead of a raw bool for code readability
pub struct RegisterReport {
    pub was_empty: bool,
}

/// Returned by ObserverList::remove()
pub struct DeregisterReport {
    pub removed: usize,
    pub is_now_empty: bool,
}

/// An ordered list of weak observer references. Conceptually this is a sequence of
/// Weaks in registration order.
///
/// You can't hash or compare a weak, so each entry also stores the pointer obtained
/// with thin_ptr() at registration time. Raw pointers should be sync but aren't (see
/// https://internals.rust-lang.org/t/8818), so we cast them to usize. Since iteration
/// order is the contract and most lists are short, a Vec is used rather than a map.
pub struct ObserverList<T>(pub Vec<(usize, Weak<dyn Observer<T>>)>);

impl<T> ObserverList<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends the observer. Registering the same observer more than once is allowed;
    /// it gets one notification per entry.
    pub fn add(&mut self, observer: &Arc<dyn Observer<T>>) -> RegisterReport {
        let was_empty = self.0.is_empty();
        let observer_ptr = observer.thin_ptr() as usize;
        self.0.push((observer_ptr, Arc::downgrade(observer)));
        RegisterReport { was_empty }
    }

    /// Removes every entry for the given observer, keeping the remaining entries in
    /// their original order. Removing an observer that was never added removes nothing
    /// and is not an error.
    pub fn remove(&mut self, observer: &Weak<dyn Observer<T>>) -> DeregisterReport {
        let observer_ptr = observer.thin_ptr() as usize;
        let len_before = self.0.len();
        self.0.retain(|(ptr, _observer)| *ptr != observer_ptr);
        DeregisterReport {
            removed: len_before - self.0.len(),
            is_now_empty: self.0.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}
