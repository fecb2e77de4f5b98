//! Hugging Face Inference adapter.
//!
//! Text generation posts to the hosted model's inference endpoint and
//! reads the generated continuation; image generation posts to a stable
//! diffusion model and wraps the returned bytes in a data URI.

use ecore::{Client, GenError, ImageParams, ProviderId, TextParams, Transport, data_uri};
pub use request::{ImageRequest, TextRequest};

mod request;

/// Hugging Face endpoint URLs.
pub mod endpoint {
    /// Hosted inference API base.
    pub const HUGGINGFACE: &str = "https://api-inference.huggingface.co";
}

/// Default model identifiers.
pub mod model {
    /// Text generation.
    pub const TEXT: &str = "meta-llama/Llama-2-7b-chat-hf";
    /// Text-to-image generation.
    pub const IMAGE: &str = "runwayml/stable-diffusion-v1-5";
}

/// The Hugging Face adapter.
#[derive(Clone)]
pub struct HuggingFace {
    transport: Transport,
}

impl HuggingFace {
    /// Create an adapter targeting the hosted inference API.
    pub fn api(client: Client, key: &str) -> Result<Self, GenError> {
        Self::custom(client, key, endpoint::HUGGINGFACE)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Result<Self, GenError> {
        Ok(Self {
            transport: Transport::bearer(ProviderId::HuggingFace, client, key, base)?,
        })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Generate text from a single prompt.
    pub async fn generate_text(&self, params: &TextParams) -> Result<String, GenError> {
        let model = params.model.as_deref().unwrap_or(model::TEXT);
        let path = format!("/models/{model}");
        let reply = self
            .transport
            .post_json(&path, &TextRequest::from(params))
            .await?;
        request::extract_text(&reply)
    }

    /// Generate an image; returns a `data:` URI with the image bytes.
    pub async fn generate_image(&self, params: &ImageParams) -> Result<String, GenError> {
        let path = format!("/models/{}", model::IMAGE);
        let reply = self
            .transport
            .post_json(&path, &ImageRequest::from(params))
            .await?;
        let mime = reply
            .content_type
            .as_deref()
            .unwrap_or("image/jpeg")
            .to_owned();
        Ok(data_uri(&mime, &reply.body))
    }
}
