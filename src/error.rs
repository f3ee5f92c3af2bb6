use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// An observer's update failed while an event was being delivered under
    /// `DeliveryPolicy::Propagate`. `notified` counts the observers that had already
    /// been notified, in registration order, before `label`'s update failed with
    /// `message`; the rest were never reached.
    Observer {
        label: String,
        message: String,
        notified: usize,
    },
    /// A constructor was installed in a registry under a kind name that is already taken
    DuplicateKind(String),
    /// A registry was asked to build an observer of a kind it has no constructor for
    UnknownKind(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Observer {
                label,
                message,
                notified,
            } => write!(
                f,
                "observer {:?} failed to process event after {} observers were notified: {}",
                label, notified, message
            ),
            Self::DuplicateKind(kind) => {
                write!(f, "observer kind {:?} installed multiple times", kind)
            }
            Self::UnknownKind(kind) => write!(f, "no constructor for observer kind {:?}", kind),
        }
    }
}

impl Error for NotifyError {}
