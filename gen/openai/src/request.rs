//! Request bodies for the OpenAI completions, chat, and image APIs.

use ecore::{ChatParams, CodeParams, GenError, ImageParams, Reply, Role, TextParams};
use serde::{Deserialize, Serialize};

/// System prompt for code generation.
const CODE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates code. Respond with only the code, no explanations.";

/// The request body for the legacy completions API.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// The model identifier.
    pub model: String,
    /// The prompt to complete.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl From<&TextParams> for CompletionRequest {
    fn from(params: &TextParams) -> Self {
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::TEXT)
                .to_owned(),
            prompt: params.prompt.clone(),
            max_tokens: params.max_tokens.unwrap_or(800),
            temperature: params.temperature.unwrap_or(0.7),
        }
    }
}

/// The request body for the chat completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The model identifier.
    pub model: String,
    /// The conversation so far.
    pub messages: Vec<WireMessage>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// A single wire-format message.
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    /// `system`, `user`, or `assistant`.
    pub role: &'static str,
    /// The message content.
    pub content: String,
}

impl ChatRequest {
    /// Build a chat request.
    pub fn chat(params: &ChatParams) -> Self {
        let messages = params
            .messages
            .iter()
            .map(|m| WireMessage {
                role: match m.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                },
                content: m.content.clone(),
            })
            .collect();
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::CHAT)
                .to_owned(),
            messages,
            max_tokens: params.max_tokens.unwrap_or(800),
            temperature: params.temperature.unwrap_or(0.7),
        }
    }

    /// Build a code-generation request: a fixed system prompt plus the
    /// user's description.
    pub fn code(params: &CodeParams) -> Self {
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::CHAT)
                .to_owned(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: CODE_SYSTEM_PROMPT.to_owned(),
                },
                WireMessage {
                    role: "user",
                    content: match params.language.as_deref() {
                        Some(language) => {
                            format!("Generate {language} code for: {}", params.prompt)
                        }
                        None => format!("Generate {}", params.prompt),
                    },
                },
            ],
            max_tokens: params.max_tokens.unwrap_or(1500),
            temperature: params.temperature.unwrap_or(0.2),
        }
    }
}

/// The request body for the image generations API.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// The image description.
    pub prompt: String,
    /// Number of images.
    pub n: u8,
    /// Output size, e.g. `1024x1024`.
    pub size: String,
    /// Rendering style.
    pub style: &'static str,
}

impl From<&ImageParams> for ImageRequest {
    fn from(params: &ImageParams) -> Self {
        let size = match (params.width, params.height) {
            (Some(w), Some(h)) => format!("{w}x{h}"),
            _ => "1024x1024".to_owned(),
        };
        Self {
            prompt: params.prompt.clone(),
            n: params.count.unwrap_or(1),
            size,
            style: params.style.map(|s| s.as_str()).unwrap_or("vivid"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}

/// Extract `choices[0].text`, trimmed, from a completions reply.
pub(crate) fn extract_completion(reply: &Reply) -> Result<String, GenError> {
    let resp: CompletionResponse = reply.json()?;
    resp.choices
        .into_iter()
        .next()
        .map(|c| c.text.trim().to_owned())
        .ok_or_else(|| reply.malformed("no completion returned"))
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Extract `choices[0].message.content` from a chat reply.
pub(crate) fn extract_chat(reply: &Reply) -> Result<String, GenError> {
    let resp: ChatResponse = reply.json()?;
    resp.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| reply.malformed("no completion returned"))
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: String,
}

/// Extract `data[0].url` from an image reply.
pub(crate) fn extract_image_url(reply: &Reply) -> Result<String, GenError> {
    let resp: ImageResponse = reply.json()?;
    resp.data
        .into_iter()
        .next()
        .map(|d| d.url)
        .ok_or_else(|| reply.malformed("no image returned"))
}
