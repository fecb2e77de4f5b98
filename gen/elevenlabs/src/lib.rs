//! ElevenLabs text-to-speech adapter.
//!
//! Speech synthesis returns the audio bytes as a `data:audio/…` URI;
//! `voices` lists the account's voice catalogue.

use ecore::{Client, GenError, ProviderId, SpeechParams, Transport, data_uri};
pub use request::{SpeechRequest, Voice};

mod request;

/// ElevenLabs endpoint URLs.
pub mod endpoint {
    /// ElevenLabs API base.
    pub const ELEVENLABS: &str = "https://api.elevenlabs.io";
}

/// Default voice and model identifiers.
pub mod defaults {
    /// Default voice ("Sarah").
    pub const VOICE: &str = "EXAVITQu4vr4xnSDxMaL";
    /// Default synthesis model.
    pub const MODEL: &str = "eleven_monolingual_v1";
}

/// The ElevenLabs adapter.
#[derive(Clone)]
pub struct ElevenLabs {
    transport: Transport,
}

impl ElevenLabs {
    /// Create an adapter targeting the ElevenLabs API.
    pub fn api(client: Client, key: &str) -> Result<Self, GenError> {
        Self::custom(client, key, endpoint::ELEVENLABS)
    }

    /// Create an adapter targeting a custom base URL.
    pub fn custom(client: Client, key: &str, base: &str) -> Result<Self, GenError> {
        Ok(Self {
            transport: Transport::custom_header(
                ProviderId::ElevenLabs,
                client,
                "xi-api-key",
                key,
                base,
            )?,
        })
    }

    /// The underlying transport.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Synthesize speech; returns a `data:` URI with the audio bytes.
    pub async fn generate_speech(&self, params: &SpeechParams) -> Result<String, GenError> {
        let voice = params.voice.as_deref().unwrap_or(defaults::VOICE);
        let path = format!("/v1/text-to-speech/{voice}");
        let reply = self
            .transport
            .post_json(&path, &SpeechRequest::from(params))
            .await?;
        let mime = reply
            .content_type
            .as_deref()
            .unwrap_or("audio/mpeg")
            .to_owned();
        Ok(data_uri(&mime, &reply.body))
    }

    /// List the available voices.
    pub async fn voices(&self) -> Result<Vec<Voice>, GenError> {
        let reply = self.transport.get("/v1/voices").await?;
        request::extract_voices(&reply)
    }
}
