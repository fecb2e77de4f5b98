//! Adapter dispatch and the client registry.
//!
//! `Adapter` wraps the six vendor adapters behind one enum with a method
//! per operation. `Registry` is the constructed object embedders pass
//! around: it owns the key store, the shared HTTP client, and the
//! failure notifier, and re-reads the stored credential before every
//! dispatch.

pub use adapter::{Adapter, build_adapter};
pub use elevenlabs::Voice;
pub use registry::Registry;

mod adapter;
mod registry;
