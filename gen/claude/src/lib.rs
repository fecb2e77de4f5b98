//! Claude (Anthropic) adapter.
//!
//! Authenticates with `x-api-key` plus a pinned `anthropic-version` and
//! posts to the Messages API for text, chat, and code generation.

use ecore::{ChatParams, Client, CodeParams, GenError, ProviderId, TextParams, Transport};
pub use request::MessagesRequest;

mod request;

/// Anthropic endpoint URLs.
pub mod endpoint {
    /// Anthropic API base.
    pub const ANTHROPIC: &str = "https://api.anthropic.com";
}

/// Pinned API version header value.
pub const API_VERSION: &str = "2023-06-01";

/// Default model identifiers.
pub mod model {
    /// Text and chat generation.
    pub const TEXT: &str = "claude-3-sonnet-20240229";
    /// Code generation.
    pub const CODE: &str = "claude-3-opus-20240229";
}

/// The Claude adapter.
#[derive(Clone)]
pub struct Claude {
    transport: Transport,
}

impl Claude {
    /// Create an adapter targeting the Anthropic API.
    pub fn api(client: Client, key: &str) -> Result<Self, GenError> {
        Self::custom(client, key, endpoint::ANTHROPIC)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Result<Self, GenError> {
        let transport = Transport::custom_header(ProviderId::Claude, client, "x-api-key", key, base)?
            .with_static_header("anthropic-version", API_VERSION);
        Ok(Self { transport })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Generate text from a single prompt.
    pub async fn generate_text(&self, params: &TextParams) -> Result<String, GenError> {
        self.send(&MessagesRequest::text(params)).await
    }

    /// Continue a chat conversation.
    pub async fn chat(&self, params: &ChatParams) -> Result<String, GenError> {
        self.send(&MessagesRequest::chat(params)).await
    }

    /// Generate code from a description.
    pub async fn generate_code(&self, params: &CodeParams) -> Result<String, GenError> {
        self.send(&MessagesRequest::code(params)).await
    }

    async fn send(&self, body: &MessagesRequest) -> Result<String, GenError> {
        let reply = self.transport.post_json("/v1/messages", body).await?;
        request::extract_text(&reply)
    }
}
