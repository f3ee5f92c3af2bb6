use super::*;

/// An object that can be notified when a subject it is registered with publishes an
/// event. Implementations are shared as `Arc<dyn Observer<T>>`; subjects only hold
/// them weakly.
pub trait Observer<T>: Send + Sync {
    /// Identifying label, used when a failed update is logged or reported
    fn label(&self) -> &str;

    /// Process a published event. The subject does not consume the return value
    /// beyond applying its delivery policy to failures.
    fn update(&self, payload: &T) -> Result<(), Box<dyn Error>>;
}
