//! Request body for the Gemini `generateContent` API.

use ecore::{ChatParams, CodeParams, GenError, Reply, Role, TextParams};
use serde::{Deserialize, Serialize};

/// The request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// The conversation contents.
    pub contents: Vec<Content>,
    /// Sampling configuration.
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// One content block.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// `user` or `model`. Omitted for single-prompt requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    /// The text parts.
    pub parts: Vec<Part>,
}

/// A text part.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// The text.
    pub text: String,
}

/// Sampling configuration.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens to generate.
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    /// Top-p sampling.
    #[serde(rename = "topP")]
    pub top_p: f64,
    /// Top-k sampling.
    #[serde(rename = "topK")]
    pub top_k: u32,
}

impl GenerationConfig {
    fn new(temperature: f64, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

impl GenerateRequest {
    /// Build a single-prompt text request.
    pub fn text(params: &TextParams) -> Self {
        Self {
            contents: vec![prompt_content(params.prompt.clone())],
            generation_config: GenerationConfig::new(
                params.temperature.unwrap_or(0.7),
                params.max_tokens.unwrap_or(800),
            ),
        }
    }

    /// Build a chat request. Gemini only accepts `user` and `model`
    /// roles; system messages are sent as user turns.
    pub fn chat(params: &ChatParams) -> Self {
        let contents = params
            .messages
            .iter()
            .map(|m| Content {
                role: Some(match m.role {
                    Role::Assistant => "model",
                    Role::User | Role::System => "user",
                }),
                parts: vec![Part {
                    text: m.content.clone(),
                }],
            })
            .collect();
        Self {
            contents,
            generation_config: GenerationConfig::new(
                params.temperature.unwrap_or(0.7),
                params.max_tokens.unwrap_or(800),
            ),
        }
    }

    /// Build a code-generation request.
    pub fn code(params: &CodeParams) -> Self {
        let prompt = match params.language.as_deref() {
            Some(language) => format!(
                "Generate {language} code for: {}. Only respond with the code, no explanations.",
                params.prompt
            ),
            None => format!(
                "Generate code for: {}. Only respond with the code, no explanations.",
                params.prompt
            ),
        };
        Self {
            contents: vec![prompt_content(prompt)],
            generation_config: GenerationConfig::new(
                params.temperature.unwrap_or(0.2),
                params.max_tokens.unwrap_or(1500),
            ),
        }
    }
}

fn prompt_content(text: String) -> Content {
    Content {
        role: None,
        parts: vec![Part { text }],
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Extract `candidates[0].content.parts[0].text` from a reply.
pub(crate) fn extract_text(reply: &Reply) -> Result<String, GenError> {
    let resp: GenerateResponse = reply.json()?;
    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| reply.malformed("no content generated"))
}

#[cfg(test)]
mod tests {
    use super::{GenerateRequest, extract_text};
    use ecore::{ChatMessage, ChatParams, CodeParams, ProviderId, Reply, TextParams};

    #[test]
    fn text_request_uses_original_defaults() {
        let req = GenerateRequest::text(&TextParams::new("a haiku"));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "a haiku");
        assert!(body["contents"][0].get("role").is_none());
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(body["generationConfig"]["topP"], 0.8);
        assert_eq!(body["generationConfig"]["topK"], 40);
    }

    #[test]
    fn chat_request_maps_assistant_to_model_role() {
        let params = ChatParams::new(vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi there"),
        ]);
        let req = GenerateRequest::chat(&params);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["contents"][1]["parts"][0]["text"], "hi there");
    }

    #[test]
    fn system_messages_become_user_turns() {
        let params = ChatParams::new(vec![ChatMessage::system("be brief")]);
        let req = GenerateRequest::chat(&params);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn code_request_templates_the_language() {
        let params = CodeParams {
            language: Some("rust".into()),
            ..CodeParams::new("a fibonacci function")
        };
        let req = GenerateRequest::code(&params);
        let body = serde_json::to_value(&req).unwrap();
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Generate rust code for: a fibonacci function"));
        assert_eq!(body["generationConfig"]["temperature"], 0.2);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[test]
    fn extract_text_reads_the_first_candidate() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}],"role":"model"}}]}"#;
        let reply = Reply::new(ProviderId::Gemini, 200, None, body.as_bytes().to_vec());
        assert_eq!(extract_text(&reply).unwrap(), "hello");
    }

    #[test]
    fn empty_candidates_is_a_vendor_error() {
        let reply = Reply::new(
            ProviderId::Gemini,
            200,
            None,
            br#"{"candidates":[]}"#.to_vec(),
        );
        let err = extract_text(&reply).unwrap_err();
        assert!(err.to_string().contains("no content generated"));
    }
}
