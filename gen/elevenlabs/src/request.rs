//! Request and response bodies for the ElevenLabs API.

use compact_str::CompactString;
use ecore::{GenError, Reply, SpeechParams};
use serde::{Deserialize, Serialize};

/// The request body for text-to-speech synthesis.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    /// The text to speak.
    pub text: String,
    /// Synthesis model identifier.
    pub model_id: String,
    /// Voice tuning.
    pub voice_settings: VoiceSettings,
}

/// Voice tuning settings.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceSettings {
    /// Voice stability, 0.0..=1.0.
    pub stability: f64,
    /// Similarity boost, 0.0..=1.0.
    pub similarity_boost: f64,
}

impl From<&SpeechParams> for SpeechRequest {
    fn from(params: &SpeechParams) -> Self {
        Self {
            text: params.text.clone(),
            model_id: params
                .model
                .as_deref()
                .unwrap_or(crate::defaults::MODEL)
                .to_owned(),
            voice_settings: VoiceSettings {
                stability: params.stability.unwrap_or(0.5),
                similarity_boost: params.similarity.unwrap_or(0.75),
            },
        }
    }
}

/// One voice in the account catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    /// Stable voice identifier.
    pub voice_id: CompactString,
    /// Display name.
    pub name: String,
    /// Sample audio URL.
    #[serde(default)]
    pub preview_url: String,
    /// Catalogue category, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Vec<Voice>,
}

/// Extract the voice list from a reply.
pub(crate) fn extract_voices(reply: &Reply) -> Result<Vec<Voice>, GenError> {
    let resp: VoicesResponse = reply.json()?;
    Ok(resp.voices)
}

#[cfg(test)]
mod tests {
    use super::{SpeechRequest, extract_voices};
    use ecore::{ProviderId, Reply, SpeechParams};

    #[test]
    fn speech_request_uses_original_defaults() {
        let body = serde_json::to_value(SpeechRequest::from(&SpeechParams::new("hello world")))
            .unwrap();
        assert_eq!(body["text"], "hello world");
        assert_eq!(body["model_id"], "eleven_monolingual_v1");
        assert_eq!(body["voice_settings"]["stability"], 0.5);
        assert_eq!(body["voice_settings"]["similarity_boost"], 0.75);
    }

    #[test]
    fn tuning_overrides_are_passed_through() {
        let params = SpeechParams {
            stability: Some(0.9),
            similarity: Some(0.3),
            ..SpeechParams::new("hi")
        };
        let body = serde_json::to_value(SpeechRequest::from(&params)).unwrap();
        assert_eq!(body["voice_settings"]["stability"], 0.9);
        assert_eq!(body["voice_settings"]["similarity_boost"], 0.3);
    }

    #[test]
    fn extract_voices_reads_the_catalogue() {
        let body = r#"{"voices":[
            {"voice_id":"abc","name":"Sarah","preview_url":"https://a/p.mp3","category":"premade"},
            {"voice_id":"def","name":"Custom"}
        ]}"#;
        let reply = Reply::new(ProviderId::ElevenLabs, 200, None, body.as_bytes().to_vec());
        let voices = extract_voices(&reply).unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].voice_id, "abc");
        assert_eq!(voices[1].category, None);
    }

    #[test]
    fn missing_voices_field_reads_as_empty() {
        let reply = Reply::new(ProviderId::ElevenLabs, 200, None, b"{}".to_vec());
        assert!(extract_voices(&reply).unwrap().is_empty());
    }
}
