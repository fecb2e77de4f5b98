//! Request body for the Anthropic Messages API.

use ecore::{ChatParams, CodeParams, GenError, Reply, Role, TextParams};
use serde::{Deserialize, Serialize};

/// The request body for `/v1/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// The model identifier.
    pub model: String,
    /// The conversation so far.
    pub messages: Vec<WireMessage>,
    /// Maximum tokens to generate. Required by the API.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// A single wire-format message.
#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    /// `user` or `assistant`.
    pub role: &'static str,
    /// The message content.
    pub content: String,
}

impl MessagesRequest {
    /// Build a single-prompt text request.
    pub fn text(params: &TextParams) -> Self {
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::TEXT)
                .to_owned(),
            messages: vec![WireMessage {
                role: "user",
                content: params.prompt.clone(),
            }],
            max_tokens: params.max_tokens.unwrap_or(800),
            temperature: params.temperature.unwrap_or(0.7),
        }
    }

    /// Build a chat request. The Messages API accepts only `user` and
    /// `assistant` roles; system messages are sent as user turns.
    pub fn chat(params: &ChatParams) -> Self {
        let messages = params
            .messages
            .iter()
            .map(|m| WireMessage {
                role: match m.role {
                    Role::Assistant => "assistant",
                    Role::User | Role::System => "user",
                },
                content: m.content.clone(),
            })
            .collect();
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::TEXT)
                .to_owned(),
            messages,
            max_tokens: params.max_tokens.unwrap_or(800),
            temperature: params.temperature.unwrap_or(0.7),
        }
    }

    /// Build a code-generation request.
    pub fn code(params: &CodeParams) -> Self {
        Self {
            model: params
                .model
                .as_deref()
                .unwrap_or(crate::model::CODE)
                .to_owned(),
            messages: vec![WireMessage {
                role: "user",
                content: match params.language.as_deref() {
                    Some(language) => format!(
                        "Generate {language} code for: {}. Only respond with the code, no explanations.",
                        params.prompt
                    ),
                    None => format!(
                        "Generate code for: {}. Only respond with the code, no explanations.",
                        params.prompt
                    ),
                },
            }],
            max_tokens: params.max_tokens.unwrap_or(1500),
            temperature: params.temperature.unwrap_or(0.2),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Extract `content[0].text` from a reply.
pub(crate) fn extract_text(reply: &Reply) -> Result<String, GenError> {
    let resp: MessagesResponse = reply.json()?;
    resp.content
        .into_iter()
        .next()
        .map(|b| b.text)
        .ok_or_else(|| reply.malformed("no content generated"))
}

#[cfg(test)]
mod tests {
    use super::{MessagesRequest, extract_text};
    use ecore::{ChatMessage, ChatParams, CodeParams, ProviderId, Reply, TextParams};

    #[test]
    fn text_request_wraps_the_prompt_in_a_user_message() {
        let body = serde_json::to_value(MessagesRequest::text(&TextParams::new("a sonnet")))
            .unwrap();
        assert_eq!(body["model"], "claude-3-sonnet-20240229");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "a sonnet");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["temperature"], 0.7);
    }

    #[test]
    fn chat_request_keeps_user_and_assistant_turns() {
        let params = ChatParams::new(vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
            ChatMessage::system("be brief"),
        ]);
        let body = serde_json::to_value(MessagesRequest::chat(&params)).unwrap();
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][1]["role"], "assistant");
        assert_eq!(body["messages"][2]["role"], "user");
    }

    #[test]
    fn code_request_uses_the_opus_default_model() {
        let body = serde_json::to_value(MessagesRequest::code(&CodeParams::new("a parser")))
            .unwrap();
        assert_eq!(body["model"], "claude-3-opus-20240229");
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .starts_with("Generate code for: a parser")
        );
        assert_eq!(body["max_tokens"], 1500);
    }

    #[test]
    fn extract_text_reads_the_first_content_block() {
        let body = r#"{"content":[{"type":"text","text":"certainly"}],"role":"assistant"}"#;
        let reply = Reply::new(ProviderId::Claude, 200, None, body.as_bytes().to_vec());
        assert_eq!(extract_text(&reply).unwrap(), "certainly");
    }

    #[test]
    fn empty_content_is_a_vendor_error() {
        let reply = Reply::new(ProviderId::Claude, 200, None, br#"{"content":[]}"#.to_vec());
        assert!(extract_text(&reply).is_err());
    }
}
