use super::*;

/// What a subject does when an observer's update fails during a publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Log the failure and keep notifying the remaining observers (the default)
    Isolate,
    /// Stop at the first failure and surface it to the publisher. Observers earlier in
    /// registration order have already been notified by then.
    Propagate,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self::Isolate
    }
}

/// Returned by Subject::publish()
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishReport {
    /// Entries whose observer's update ran and succeeded
    pub notified: usize,
    /// Entries whose observer's update failed (always 0 under `DeliveryPolicy::Propagate`)
    pub failed: usize,
    /// Entries whose observer was dropped without being deregistered
    pub stale: usize,
}

/// A publisher that broadcasts events to registered observers, synchronously and in
/// registration order.
///
/// The subject holds observers weakly; the caller keeps them alive and removes them
/// explicitly with deregister(). An entry whose observer has been dropped is skipped
/// (and logged) when publishing, but stays in the list until deregistered.
pub struct Subject<T> {
    observers: ObserverList<T>,
    policy: DeliveryPolicy,
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::default())
    }

    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            observers: ObserverList::new(),
            policy,
        }
    }

    /// Appends the observer to the notification order. Registering the same observer
    /// twice is allowed; it then gets every event twice. The report says whether the
    /// subject had no observers beforehand.
    pub fn register(&mut self, observer: &Arc<dyn Observer<T>>) -> RegisterReport {
        self.observers.add(observer)
    }

    /// Removes every entry for the given observer, preserving the order of the rest.
    /// The report carries how many entries were removed and whether the subject is now
    /// empty; deregistering an observer that was never registered removes zero and is
    /// not an error.
    pub fn deregister(&mut self, observer: &Weak<dyn Observer<T>>) -> DeregisterReport {
        self.observers.remove(observer)
    }

    /// Broadcasts an event to every registered observer, blocking until the last
    /// update has returned. Failures are handled per the subject's DeliveryPolicy.
    /// Publishing with no observers trivially succeeds.
    pub fn publish(&self, payload: &T) -> NotifyResult<PublishReport> {
        let mut report = PublishReport::default();
        for (_ptr, observer) in &self.observers.0 {
            let observer = match observer.upgrade() {
                Some(observer) => observer,
                None => {
                    error!("observer dropped without being deregistered");
                    report.stale += 1;
                    continue;
                }
            };
            match observer.update(payload) {
                Ok(()) => report.notified += 1,
                Err(e) => match self.policy {
                    DeliveryPolicy::Isolate => {
                        error!("observer {:?} failed to process event: {}", observer.label(), e);
                        report.failed += 1;
                    }
                    DeliveryPolicy::Propagate => {
                        return Err(NotifyError::Observer {
                            label: observer.label().to_owned(),
                            message: e.to_string(),
                            notified: report.notified,
                        });
                    }
                },
            }
        }
        Ok(report)
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Number of entries in the notification order (duplicates and stale entries count)
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}
