//! OpenAI adapter.
//!
//! Covers the legacy completions endpoint for single-prompt text, the
//! chat completions endpoint for chat and code, and the image
//! generations endpoint.

use ecore::{ChatParams, Client, CodeParams, GenError, ImageParams, ProviderId, TextParams, Transport};
pub use request::{ChatRequest, CompletionRequest, ImageRequest};

mod request;

/// OpenAI endpoint URLs.
pub mod endpoint {
    /// OpenAI API base.
    pub const OPENAI: &str = "https://api.openai.com";
}

/// Default model identifiers.
pub mod model {
    /// Single-prompt text generation (legacy completions).
    pub const TEXT: &str = "gpt-3.5-turbo-instruct";
    /// Chat and code generation.
    pub const CHAT: &str = "gpt-3.5-turbo";
}

/// The OpenAI adapter.
#[derive(Clone)]
pub struct OpenAI {
    transport: Transport,
}

impl OpenAI {
    /// Create an adapter targeting the OpenAI API.
    pub fn api(client: Client, key: &str) -> Result<Self, GenError> {
        Self::custom(client, key, endpoint::OPENAI)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Result<Self, GenError> {
        Ok(Self {
            transport: Transport::bearer(ProviderId::OpenAI, client, key, base)?,
        })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Generate text from a single prompt.
    pub async fn generate_text(&self, params: &TextParams) -> Result<String, GenError> {
        let reply = self
            .transport
            .post_json("/v1/completions", &CompletionRequest::from(params))
            .await?;
        request::extract_completion(&reply)
    }

    /// Generate an image; returns the URL the vendor responds with.
    pub async fn generate_image(&self, params: &ImageParams) -> Result<String, GenError> {
        let reply = self
            .transport
            .post_json("/v1/images/generations", &ImageRequest::from(params))
            .await?;
        request::extract_image_url(&reply)
    }

    /// Continue a chat conversation.
    pub async fn chat(&self, params: &ChatParams) -> Result<String, GenError> {
        let reply = self
            .transport
            .post_json("/v1/chat/completions", &ChatRequest::chat(params))
            .await?;
        request::extract_chat(&reply)
    }

    /// Generate code from a description.
    pub async fn generate_code(&self, params: &CodeParams) -> Result<String, GenError> {
        let reply = self
            .transport
            .post_json("/v1/chat/completions", &ChatRequest::code(params))
            .await?;
        request::extract_chat(&reply)
    }
}
