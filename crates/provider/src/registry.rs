//! `Registry` — one constructed object owning the key store, the shared
//! HTTP client, and the failure notifier.
//!
//! The stored credential is re-read before every dispatch, so a key
//! saved mid-session takes effect on the next call, and a missing
//! credential fails before any network I/O. Every failure travels both
//! channels: a `Notice` through the notifier and the `GenError`
//! returned to the caller.

use crate::{Adapter, Voice, build_adapter};
use anyhow::Result;
use elevenlabs::defaults;
use ecore::{
    ChatParams, Client, CodeParams, GenError, ImageParams, LogNotifier, Notice, Notifier,
    Operation, ProviderId, SpeechParams, TextParams,
};
use keystore::KeyStore;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// The client registry: key store + HTTP client + notifier.
///
/// Methods take `&self`; concurrent generation calls are independent
/// in-flight operations with no ordering, de-duplication, or
/// cancellation. The store lock is held only while reading or saving a
/// key, never across a network call.
pub struct Registry<S: KeyStore> {
    store: RwLock<S>,
    client: Client,
    notifier: Box<dyn Notifier>,
    endpoints: BTreeMap<ProviderId, String>,
}

impl<S: KeyStore> Registry<S> {
    /// Create a registry with the default log notifier.
    pub fn new(store: S) -> Self {
        Self::with_notifier(store, LogNotifier)
    }

    /// Create a registry with a custom notifier.
    pub fn with_notifier(store: S, notifier: impl Notifier + 'static) -> Self {
        Self {
            store: RwLock::new(store),
            client: Client::new(),
            notifier: Box::new(notifier),
            endpoints: BTreeMap::new(),
        }
    }

    /// Override a vendor's endpoint base URL (used to point adapters at
    /// a mock server).
    pub fn override_endpoint(mut self, provider: ProviderId, base: impl Into<String>) -> Self {
        self.endpoints.insert(provider, base.into());
        self
    }

    /// Save a key for a provider, overwriting any prior value.
    pub fn set_key(&self, provider: ProviderId, secret: &str) -> Result<()> {
        let mut store = self.store.write().expect("key store lock poisoned");
        store.set(provider, secret)?;
        Ok(())
    }

    /// The stored key for a provider, if any.
    pub fn key(&self, provider: ProviderId) -> Option<String> {
        let store = self.store.read().expect("key store lock poisoned");
        store.get(provider).map(str::to_owned)
    }

    /// Providers that currently have a stored key.
    pub fn configured(&self) -> Vec<ProviderId> {
        let store = self.store.read().expect("key store lock poisoned");
        store.entries()
    }

    /// Generate text with the given provider.
    pub async fn generate_text(
        &self,
        provider: ProviderId,
        params: &TextParams,
    ) -> Result<String, GenError> {
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.generate_text(params).await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Text, result)
    }

    /// Generate an image with the given provider.
    pub async fn generate_image(
        &self,
        provider: ProviderId,
        params: &ImageParams,
    ) -> Result<String, GenError> {
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.generate_image(params).await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Image, result)
    }

    /// Continue a chat conversation with the given provider.
    pub async fn chat(
        &self,
        provider: ProviderId,
        params: &ChatParams,
    ) -> Result<String, GenError> {
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.chat(params).await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Chat, result)
    }

    /// Generate code with the given provider.
    pub async fn generate_code(
        &self,
        provider: ProviderId,
        params: &CodeParams,
    ) -> Result<String, GenError> {
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.generate_code(params).await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Code, result)
    }

    /// Synthesize speech (ElevenLabs).
    pub async fn generate_speech(&self, params: &SpeechParams) -> Result<String, GenError> {
        let provider = ProviderId::ElevenLabs;
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.generate_speech(params).await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Speech, result)
    }

    /// List available voices (ElevenLabs).
    pub async fn voices(&self) -> Result<Vec<Voice>, GenError> {
        let provider = ProviderId::ElevenLabs;
        let result = match self.adapter(provider) {
            Ok(adapter) => adapter.voices().await,
            Err(e) => Err(e),
        };
        self.observe(provider, Operation::Voices, result)
    }

    /// The default voice used when `SpeechParams::voice` is unset.
    pub fn default_voice(&self) -> &'static str {
        defaults::VOICE
    }

    /// Read the live credential and build the adapter for one dispatch.
    fn adapter(&self, provider: ProviderId) -> Result<Adapter, GenError> {
        let secret = {
            let store = self.store.read().expect("key store lock poisoned");
            store
                .get(provider)
                .map(str::to_owned)
                .ok_or(GenError::MissingCredential(provider))?
        };
        build_adapter(
            provider,
            self.client.clone(),
            &secret,
            self.endpoints.get(&provider).map(String::as_str),
        )
    }

    fn observe<T>(
        &self,
        provider: ProviderId,
        operation: Operation,
        result: Result<T, GenError>,
    ) -> Result<T, GenError> {
        if let Err(e) = &result {
            self.notifier.notify(&Notice {
                provider,
                operation,
                message: e.to_string(),
            });
        }
        result
    }
}

impl<S: KeyStore> std::fmt::Debug for Registry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configured = self.configured();
        f.debug_struct("Registry")
            .field("configured", &configured)
            .finish()
    }
}
