use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use super::state::{StateAccessor, StateError};

/// In-memory ledger state.
///
/// Intended for tests and the development runner. Only writes validate the
/// key: an empty key can never hold a value, so reading it finds nothing and
/// deleting it is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Number of keys currently holding a value. A poisoned lock is read
    /// through.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_key(key: &str) -> Result<(), StateError> {
        if key.is_empty() {
            return Err(StateError::InvalidKey("key must not be an empty string".to_string()));
        }
        Ok(())
    }
}

impl StateAccessor for InMemoryState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StateError::Backend("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        Self::check_key(key)?;
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StateError::Backend("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), StateError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StateError::Backend("lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_absent_key() {
        let state = InMemoryState::new();
        assert_eq!(state.get_state("missing").unwrap(), None);
    }

    #[test]
    fn put_then_get_returns_value() {
        let state = InMemoryState::new();
        state.put_state("a", b"100".to_vec()).unwrap();
        assert_eq!(state.get_state("a").unwrap(), Some(b"100".to_vec()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn empty_value_is_still_present() {
        let state = InMemoryState::new();
        state.put_state("a", Vec::new()).unwrap();
        assert_eq!(state.get_state("a").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn delete_absent_key_is_a_no_op() {
        let state = InMemoryState::with_entries([("a", "1")]);
        state.del_state("b").unwrap();
        assert_eq!(state.len(), 1);

        state.del_state("a").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn empty_key_is_rejected_on_write_only() {
        let state = InMemoryState::new();
        let err = state.put_state("", b"x".to_vec()).unwrap_err();
        assert!(matches!(err, StateError::InvalidKey(_)));
        assert!(state.is_empty());

        assert_eq!(state.get_state("").unwrap(), None);
        state.del_state("").unwrap();
    }

    #[test]
    fn len_survives_a_poisoned_lock() {
        let state = std::sync::Arc::new(InMemoryState::with_entries([("a", "1"), ("b", "2")]));
        let poisoner = std::sync::Arc::clone(&state);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(state.entries.is_poisoned());
        assert_eq!(state.len(), 2);
        assert!(matches!(state.get_state("a"), Err(StateError::Backend(_))));
    }
}
