//! Google Gemini adapter.
//!
//! Authenticates with a `key` query parameter and posts to the
//! `generateContent` endpoint for text, chat, and code generation.

use ecore::{ChatParams, Client, CodeParams, GenError, ProviderId, TextParams, Transport};
pub use request::GenerateRequest;

mod request;

/// Gemini endpoint URLs.
pub mod endpoint {
    /// Generative Language API base.
    pub const GEMINI: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Default model identifiers.
pub mod model {
    /// Text, chat, and code generation.
    pub const TEXT: &str = "gemini-pro";
}

/// The Google Gemini adapter.
#[derive(Clone)]
pub struct Gemini {
    transport: Transport,
}

impl Gemini {
    /// Create an adapter targeting the Gemini API.
    pub fn api(client: Client, key: &str) -> Self {
        Self::custom(client, key, endpoint::GEMINI)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Self {
        Self {
            transport: Transport::query_key(ProviderId::Gemini, client, "key", key, base),
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Generate text from a single prompt.
    pub async fn generate_text(&self, params: &TextParams) -> Result<String, GenError> {
        self.generate(
            params.model.as_deref().unwrap_or(model::TEXT),
            &GenerateRequest::text(params),
        )
        .await
    }

    /// Continue a chat conversation.
    pub async fn chat(&self, params: &ChatParams) -> Result<String, GenError> {
        self.generate(
            params.model.as_deref().unwrap_or(model::TEXT),
            &GenerateRequest::chat(params),
        )
        .await
    }

    /// Generate code from a description.
    pub async fn generate_code(&self, params: &CodeParams) -> Result<String, GenError> {
        self.generate(
            params.model.as_deref().unwrap_or(model::TEXT),
            &GenerateRequest::code(params),
        )
        .await
    }

    async fn generate(&self, model: &str, body: &GenerateRequest) -> Result<String, GenError> {
        let path = format!("/models/{model}:generateContent");
        let reply = self.transport.post_json(&path, body).await?;
        request::extract_text(&reply)
    }
}
