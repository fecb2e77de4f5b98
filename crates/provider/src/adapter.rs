//! Adapter enum dispatch.
//!
//! Unified `Adapter` enum over the concrete vendor adapters. Each
//! operation dispatches to the vendors that implement it and fails with
//! `GenError::Unsupported` everywhere else.

use claude::Claude;
use clipdrop::Clipdrop;
use elevenlabs::{ElevenLabs, Voice};
use gemini::Gemini;
use ecore::{
    ChatParams, Client, CodeParams, GenError, ImageParams, Operation, ProviderId, SpeechParams,
    TextParams,
};
use huggingface::HuggingFace;
use openai::OpenAI;

/// A unified vendor adapter.
#[derive(Clone)]
pub enum Adapter {
    /// Google Gemini generateContent API.
    Gemini(Gemini),
    /// OpenAI completions, chat and image APIs.
    OpenAI(OpenAI),
    /// Claude (Anthropic) Messages API.
    Claude(Claude),
    /// Hugging Face hosted inference API.
    HuggingFace(HuggingFace),
    /// ElevenLabs text-to-speech API.
    ElevenLabs(ElevenLabs),
    /// Clipdrop text-to-image API.
    Clipdrop(Clipdrop),
}

/// Construct an adapter for a provider from a shared client and the
/// stored secret. `base` overrides the vendor endpoint (test seam).
pub fn build_adapter(
    provider: ProviderId,
    client: Client,
    key: &str,
    base: Option<&str>,
) -> Result<Adapter, GenError> {
    let adapter = match provider {
        ProviderId::Gemini => Adapter::Gemini(match base {
            Some(base) => Gemini::custom(client, key, base),
            None => Gemini::api(client, key),
        }),
        ProviderId::OpenAI => Adapter::OpenAI(match base {
            Some(base) => OpenAI::custom(client, key, base)?,
            None => OpenAI::api(client, key)?,
        }),
        ProviderId::Claude => Adapter::Claude(match base {
            Some(base) => Claude::custom(client, key, base)?,
            None => Claude::api(client, key)?,
        }),
        ProviderId::HuggingFace => Adapter::HuggingFace(match base {
            Some(base) => HuggingFace::custom(client, key, base)?,
            None => HuggingFace::api(client, key)?,
        }),
        ProviderId::ElevenLabs => Adapter::ElevenLabs(match base {
            Some(base) => ElevenLabs::custom(client, key, base)?,
            None => ElevenLabs::api(client, key)?,
        }),
        ProviderId::Clipdrop => Adapter::Clipdrop(match base {
            Some(base) => Clipdrop::custom(client, key, base)?,
            None => Clipdrop::api(client, key)?,
        }),
    };
    Ok(adapter)
}

impl Adapter {
    /// The vendor behind this adapter.
    pub fn provider(&self) -> ProviderId {
        match self {
            Self::Gemini(_) => ProviderId::Gemini,
            Self::OpenAI(_) => ProviderId::OpenAI,
            Self::Claude(_) => ProviderId::Claude,
            Self::HuggingFace(_) => ProviderId::HuggingFace,
            Self::ElevenLabs(_) => ProviderId::ElevenLabs,
            Self::Clipdrop(_) => ProviderId::Clipdrop,
        }
    }

    /// Whether the vendor offers an operation.
    pub fn supports(&self, operation: Operation) -> bool {
        use Operation::*;
        match self {
            Self::Gemini(_) => matches!(operation, Text | Chat | Code),
            Self::OpenAI(_) => matches!(operation, Text | Image | Chat | Code),
            Self::Claude(_) => matches!(operation, Text | Chat | Code),
            Self::HuggingFace(_) => matches!(operation, Text | Image),
            Self::ElevenLabs(_) => matches!(operation, Speech | Voices),
            Self::Clipdrop(_) => matches!(operation, Image),
        }
    }

    /// Generate text from a single prompt.
    pub async fn generate_text(&self, params: &TextParams) -> Result<String, GenError> {
        match self {
            Self::Gemini(a) => a.generate_text(params).await,
            Self::OpenAI(a) => a.generate_text(params).await,
            Self::Claude(a) => a.generate_text(params).await,
            Self::HuggingFace(a) => a.generate_text(params).await,
            other => Err(GenError::unsupported(other.provider(), Operation::Text)),
        }
    }

    /// Generate an image; returns a URL or a `data:` URI.
    pub async fn generate_image(&self, params: &ImageParams) -> Result<String, GenError> {
        match self {
            Self::OpenAI(a) => a.generate_image(params).await,
            Self::HuggingFace(a) => a.generate_image(params).await,
            Self::Clipdrop(a) => a.generate_image(params).await,
            other => Err(GenError::unsupported(other.provider(), Operation::Image)),
        }
    }

    /// Continue a chat conversation.
    pub async fn chat(&self, params: &ChatParams) -> Result<String, GenError> {
        match self {
            Self::Gemini(a) => a.chat(params).await,
            Self::OpenAI(a) => a.chat(params).await,
            Self::Claude(a) => a.chat(params).await,
            other => Err(GenError::unsupported(other.provider(), Operation::Chat)),
        }
    }

    /// Generate code from a description.
    pub async fn generate_code(&self, params: &CodeParams) -> Result<String, GenError> {
        match self {
            Self::Gemini(a) => a.generate_code(params).await,
            Self::OpenAI(a) => a.generate_code(params).await,
            Self::Claude(a) => a.generate_code(params).await,
            other => Err(GenError::unsupported(other.provider(), Operation::Code)),
        }
    }

    /// Synthesize speech; returns a `data:` URI with the audio bytes.
    pub async fn generate_speech(&self, params: &SpeechParams) -> Result<String, GenError> {
        match self {
            Self::ElevenLabs(a) => a.generate_speech(params).await,
            other => Err(GenError::unsupported(other.provider(), Operation::Speech)),
        }
    }

    /// List available voices.
    pub async fn voices(&self) -> Result<Vec<Voice>, GenError> {
        match self {
            Self::ElevenLabs(a) => a.voices().await,
            other => Err(GenError::unsupported(other.provider(), Operation::Voices)),
        }
    }
}
