//! Clipdrop text-to-image adapter.
//!
//! Clipdrop takes a multipart form rather than JSON and responds with
//! raw image bytes, returned here as a `data:image/…` URI.

use ecore::{Client, GenError, ImageParams, ProviderId, Transport, data_uri};
pub use request::ImageForm;

mod request;

/// Clipdrop endpoint URLs.
pub mod endpoint {
    /// Clipdrop API base.
    pub const CLIPDROP: &str = "https://clipdrop-api.co";
}

/// The Clipdrop adapter.
#[derive(Clone)]
pub struct Clipdrop {
    transport: Transport,
}

impl Clipdrop {
    /// Create an adapter targeting the Clipdrop API.
    pub fn api(client: Client, key: &str) -> Result<Self, GenError> {
        Self::custom(client, key, endpoint::CLIPDROP)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Result<Self, GenError> {
        Ok(Self {
            transport: Transport::key_only(ProviderId::Clipdrop, client, "x-api-key", key, base)?,
        })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Generate an image; returns a `data:` URI with the image bytes.
    pub async fn generate_image(&self, params: &ImageParams) -> Result<String, GenError> {
        let form = ImageForm::from(params).into_form();
        let reply = self.transport.post_form("/text-to-image/v1", form).await?;
        let mime = reply
            .content_type
            .as_deref()
            .unwrap_or("image/png")
            .to_owned();
        Ok(data_uri(&mime, &reply.body))
    }
}
