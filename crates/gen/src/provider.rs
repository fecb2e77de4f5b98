//! Vendor and operation identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported generation vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Google Gemini generateContent API.
    Gemini,
    /// OpenAI completions, chat and image APIs.
    OpenAI,
    /// Claude (Anthropic) Messages API.
    Claude,
    /// Hugging Face Inference API.
    HuggingFace,
    /// ElevenLabs text-to-speech API.
    ElevenLabs,
    /// Clipdrop text-to-image API.
    Clipdrop,
}

impl ProviderId {
    /// All vendors, in display order.
    pub const ALL: [ProviderId; 6] = [
        Self::Gemini,
        Self::OpenAI,
        Self::Claude,
        Self::HuggingFace,
        Self::ElevenLabs,
        Self::Clipdrop,
    ];

    /// Stable identifier used for credential keys and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::Claude => "claude",
            Self::HuggingFace => "huggingface",
            Self::ElevenLabs => "elevenlabs",
            Self::Clipdrop => "clipdrop",
        }
    }

    /// Human-readable vendor name for notifications and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gemini => "Google Gemini",
            Self::OpenAI => "OpenAI",
            Self::Claude => "Anthropic Claude",
            Self::HuggingFace => "Hugging Face",
            Self::ElevenLabs => "ElevenLabs",
            Self::Clipdrop => "Clipdrop",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAI),
            "claude" => Ok(Self::Claude),
            "huggingface" => Ok(Self::HuggingFace),
            "elevenlabs" => Ok(Self::ElevenLabs),
            "clipdrop" => Ok(Self::Clipdrop),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

/// The uniform operation surface exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Single-prompt text generation.
    Text,
    /// Text-to-image generation.
    Image,
    /// Multi-turn chat completion.
    Chat,
    /// Code generation.
    Code,
    /// Text-to-speech synthesis.
    Speech,
    /// Voice catalogue listing.
    Voices,
}

impl Operation {
    /// Stable identifier used in notices and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Chat => "chat",
            Self::Code => "code",
            Self::Speech => "speech",
            Self::Voices => "voices",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ProviderId;
    use std::str::FromStr;

    #[test]
    fn provider_id_round_trips_through_str() {
        for id in ProviderId::ALL {
            assert_eq!(ProviderId::from_str(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn provider_id_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ProviderId::HuggingFace).unwrap();
        assert_eq!(json, "\"huggingface\"");
        let id: ProviderId = serde_json::from_str("\"elevenlabs\"").unwrap();
        assert_eq!(id, ProviderId::ElevenLabs);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(ProviderId::from_str("midjourney").is_err());
    }
}
