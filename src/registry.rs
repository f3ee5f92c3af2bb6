use super::*;

use std::collections::HashMap;

type Constructor<T> = Box<dyn Fn(&str) -> Arc<dyn Observer<T>> + Send + Sync>;

/// Builds observers from a kind discriminant.
///
/// Call sites that would otherwise branch on a kind string look the constructor up
/// here instead; supporting a new observer kind means installing one constructor at
/// this single extension point. The constructor is given the label the built observer
/// should carry.
pub struct ObserverRegistry<T> {
    constructors: HashMap<String, Constructor<T>>,
}

impl<T> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Installs a constructor for a kind. Each kind can be installed only once.
    pub fn add_kind<F>(&mut self, kind: &str, constructor: F) -> NotifyResult<()>
    where
        F: Fn(&str) -> Arc<dyn Observer<T>> + Send + Sync + 'static,
    {
        if self.constructors.contains_key(kind) {
            return Err(NotifyError::DuplicateKind(kind.to_owned()));
        }
        self.constructors
            .insert(kind.to_owned(), Box::new(constructor));
        Ok(())
    }

    /// Builds an observer of the given kind carrying the given label
    pub fn build(&self, kind: &str, label: &str) -> NotifyResult<Arc<dyn Observer<T>>> {
        match self.constructors.get(kind) {
            Some(constructor) => Ok(constructor(label)),
            None => Err(NotifyError::UnknownKind(kind.to_owned())),
        }
    }

    pub fn kind_count(&self) -> usize {
        self.constructors.len()
    }
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
