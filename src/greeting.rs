//! Persisted greeting: a name field that survives restarts.

use crate::persist::{CellError, KeyValueStore, PersistedCell};
use tracing::instrument;

/// Store key holding the name.
pub const NAME_KEY: &str = "name";

/// A greeting whose name is kept in a store.
#[derive(Debug)]
pub struct Greeting<S> {
    name: PersistedCell<String, S>,
}

impl<S: KeyValueStore> Greeting<S> {
    /// Opens the greeting, starting from `initial_name` when nothing is stored.
    #[instrument(skip(store))]
    pub fn open(store: S, initial_name: &str) -> Result<Self, CellError> {
        let name = PersistedCell::open(store, NAME_KEY, initial_name.to_string())?;
        Ok(Self { name })
    }

    /// Replaces the name and persists it.
    #[instrument(skip(self))]
    pub fn set_name(&mut self, name: &str) -> Result<(), CellError> {
        self.name.set(name.to_string())
    }
}

impl<S> Greeting<S> {
    /// Returns the current name.
    pub fn name(&self) -> &str {
        self.name.get()
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        if self.name().is_empty() {
            "Please type your name".to_string()
        } else {
            format!("Hello {}", self.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn test_empty_name_prompts() {
        let store = MemoryStore::new();
        let greeting = Greeting::open(&store, "").unwrap();
        assert_eq!(greeting.message(), "Please type your name");
    }

    #[test]
    fn test_name_survives_reopen() {
        let store = MemoryStore::new();
        let mut greeting = Greeting::open(&store, "").unwrap();
        greeting.set_name("Ada").unwrap();
        assert_eq!(greeting.message(), "Hello Ada");

        let reopened = Greeting::open(&store, "ignored").unwrap();
        assert_eq!(reopened.name(), "Ada");
    }

    #[test]
    fn test_initial_name_used_when_absent() {
        let store = MemoryStore::new();
        let greeting = Greeting::open(&store, "Grace").unwrap();
        assert_eq!(greeting.message(), "Hello Grace");
        assert_eq!(store.raw(NAME_KEY), None);
    }
}
