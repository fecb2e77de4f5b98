//! In-memory key store.

use crate::KeyStore;
use anyhow::Result;
use ecore::ProviderId;
use std::collections::BTreeMap;

/// In-memory store backed by a `BTreeMap`.
///
/// Useful for tests and for embedders that manage persistence
/// themselves.
#[derive(Clone, Default, Debug)]
pub struct InMemory {
    keys: BTreeMap<ProviderId, String>,
}

impl InMemory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with secrets.
    pub fn with_keys(keys: impl IntoIterator<Item = (ProviderId, String)>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeyStore for InMemory {
    fn get(&self, provider: ProviderId) -> Option<&str> {
        self.keys.get(&provider).map(String::as_str)
    }

    fn set(&mut self, provider: ProviderId, secret: &str) -> Result<Option<String>> {
        crate::validate(secret)?;
        Ok(self.keys.insert(provider, secret.to_owned()))
    }

    fn entries(&self) -> Vec<ProviderId> {
        self.keys.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_secret() {
        let mut store = InMemory::new();
        store.set(ProviderId::Gemini, "g-key").unwrap();
        assert_eq!(store.get(ProviderId::Gemini), Some("g-key"));
    }

    #[test]
    fn absent_provider_returns_none() {
        let store = InMemory::new();
        assert_eq!(store.get(ProviderId::Claude), None);
    }

    #[test]
    fn overwrite_returns_previous_and_keeps_no_history() {
        let mut store = InMemory::new();
        store.set(ProviderId::OpenAI, "first").unwrap();
        let prev = store.set(ProviderId::OpenAI, "second").unwrap();
        assert_eq!(prev.as_deref(), Some("first"));
        assert_eq!(store.get(ProviderId::OpenAI), Some("second"));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let mut store = InMemory::new();
        assert!(store.set(ProviderId::OpenAI, "").is_err());
        assert_eq!(store.get(ProviderId::OpenAI), None);
    }

    #[test]
    fn entries_lists_configured_providers() {
        let mut store = InMemory::new();
        store.set(ProviderId::Clipdrop, "c").unwrap();
        store.set(ProviderId::Gemini, "g").unwrap();
        assert_eq!(
            store.entries(),
            vec![ProviderId::Gemini, ProviderId::Clipdrop]
        );
    }
}
