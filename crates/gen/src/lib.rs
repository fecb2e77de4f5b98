//! Unified generation interface types.
//!
//! This crate provides the shared types used across all Easel vendor
//! adapters: `ProviderId`, `Operation`, the parameter bags, `ChatMessage`,
//! the `GenError` taxonomy, the `Transport` HTTP helper, and the
//! `Notifier` failure side channel.

pub use artifact::{data_uri, parse_data_uri};
pub use error::GenError;
pub use http::{Reply, Transport};
pub use message::{ChatMessage, Role};
pub use notify::{LogNotifier, Notice, Notifier};
pub use params::{ChatParams, CodeParams, ImageParams, ImageStyle, SpeechParams, TextParams};
pub use provider::{Operation, ProviderId};
pub use reqwest::{self, Client};

mod artifact;
mod error;
mod http;
mod message;
mod notify;
mod params;
mod provider;
