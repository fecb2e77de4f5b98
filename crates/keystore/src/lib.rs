//! Per-provider API key storage.
//!
//! A credential is one `(ProviderId, secret)` pair: written when the user
//! saves a key, read before every outbound request, overwritten in place
//! (last write wins, no history), never expired. The [`KeyStore`] trait
//! is fully synchronous; callers that share a store across tasks wrap it
//! in `Arc<RwLock<_>>` and hold the write lock only during explicit
//! saves.

pub use file::{TomlKeyStore, default_path};
pub use store::InMemory;

use anyhow::{Result, bail};
use ecore::ProviderId;

mod file;
mod store;

/// Durable per-provider secret storage.
pub trait KeyStore: Send + Sync {
    /// The stored secret for a provider, or `None`.
    fn get(&self, provider: ProviderId) -> Option<&str>;

    /// Store a secret, overwriting any prior value. Rejects empty
    /// secrets; returns the previous value if one existed.
    fn set(&mut self, provider: ProviderId, secret: &str) -> Result<Option<String>>;

    /// Providers that currently have a stored secret.
    fn entries(&self) -> Vec<ProviderId>;
}

/// The only validation the store performs.
pub(crate) fn validate(secret: &str) -> Result<()> {
    if secret.is_empty() {
        bail!("API key must not be empty");
    }
    Ok(())
}
