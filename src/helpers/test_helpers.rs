use super::*;

struct MockObserverInner {
    label: String,
    count: Mutex<u32>,
    seen: Mutex<Vec<String>>,
    f: Box<dyn Fn(&str) -> Result<(), Box<dyn Error>> + Send + Sync>,
}

impl Observer<String> for MockObserverInner {
    fn label(&self) -> &str {
        &self.label
    }

    fn update(&self, payload: &String) -> Result<(), Box<dyn Error>> {
        *self.count.lock().unwrap() += 1;
        self.seen.lock().unwrap().push(payload.clone());
        (self.f)(payload)
    }
}

/// An Observer<String> that counts updates and records the payloads it was given.
/// Keeps its own strong reference, so it stays alive while subjects hold it weakly.
pub struct MockObserver(Arc<MockObserverInner>);

impl MockObserver {
    pub fn new(label: &str) -> Self {
        Self::new_with_fn(label, |_| Ok(()))
    }

    /// The function runs on every update after the count and payload are recorded;
    /// its result becomes the update's result
    pub fn new_with_fn<F>(label: &str, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), Box<dyn Error>> + Send + Sync + 'static,
    {
        Self(Arc::new(MockObserverInner {
            label: label.to_owned(),
            count: Mutex::new(0),
            seen: Mutex::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    /// An observer whose every update fails with the given message
    pub fn new_failing(label: &str, message: &str) -> Self {
        let message = message.to_owned();
        Self::new_with_fn(label, move |_| Err(message.clone().into()))
    }

    pub fn get(&self) -> Arc<dyn Observer<String>> {
        self.0.clone()
    }

    pub fn update_count(&self) -> u32 {
        *self.0.count.lock().unwrap()
    }

    pub fn seen(&self) -> Vec<String> {
        self.0.seen.lock().unwrap().clone()
    }
}
