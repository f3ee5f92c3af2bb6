use super::*;

/// A Subject behind a mutex, for subjects shared between threads. An atomic flag lets
/// publish() skip the lock entirely in the common case of having no observers.
///
/// Delivery itself stays synchronous: publish() holds the lock and blocks until every
/// observer has run, so updates for a single event never interleave with registration
/// changes from other threads.
pub struct SharedSubject<T> {
    lock: Mutex<Subject<T>>,
    /// True exactly when the subject has observers. Only written while holding the
    /// lock and derived from the list state after each mutation, so it can never be
    /// left claiming the list is empty while a registered observer is in it.
    has_observers: AtomicBool,
}

impl<T> SharedSubject<T> {
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::default())
    }

    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            lock: Mutex::new(Subject::with_policy(policy)),
            has_observers: AtomicBool::new(false),
        }
    }

    pub fn register(&self, observer: &Arc<dyn Observer<T>>) {
        let mut inner = self.lock.lock().expect("failed to lock observers");
        if inner.register(observer).was_empty {
            self.has_observers.store(true, SeqCst);
        }
    }

    pub fn deregister(&self, observer: &Weak<dyn Observer<T>>) -> DeregisterReport {
        let mut inner = self.lock.lock().expect("failed to lock observers");
        let report = inner.deregister(observer);
        if report.is_now_empty {
            self.has_observers.store(false, SeqCst);
        }
        report
    }

    pub fn publish(&self, payload: &T) -> NotifyResult<PublishReport> {
        if self.has_observers.load(SeqCst) {
            let inner = self.lock.lock().expect("failed to lock observers");
            inner.publish(payload)
        } else {
            Ok(PublishReport::default())
        }
    }

    pub fn observer_count(&self) -> usize {
        self.lock
            .lock()
            .expect("failed to lock observers")
            .observer_count()
    }
}

impl<T> Default for SharedSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}
