//! Uniform generation parameter bags.
//!
//! Optional fields fall back to per-vendor defaults inside each adapter's
//! request builder, so a bag built with just a prompt is always valid.

use crate::ChatMessage;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Parameters for single-prompt text generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextParams {
    /// The prompt to complete.
    pub prompt: String,

    /// Model identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Maximum tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl TextParams {
    /// Create params with only a prompt; the adapter fills in defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Parameters for text-to-image generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageParams {
    /// The image description.
    pub prompt: String,

    /// Things the image must not contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,

    /// Output width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Output height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Diffusion inference steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    /// Classifier-free guidance scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,

    /// Number of images to request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,

    /// Rendering style (OpenAI only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
}

impl ImageParams {
    /// Create params with only a prompt; the adapter fills in defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Rendering style for OpenAI image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    /// Hyper-real, dramatic renders.
    Vivid,
    /// More natural, less stylized renders.
    Natural,
}

impl ImageStyle {
    /// Wire name for the OpenAI request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vivid => "vivid",
            Self::Natural => "natural",
        }
    }
}

/// Parameters for multi-turn chat completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatParams {
    /// The conversation so far.
    pub messages: Vec<ChatMessage>,

    /// Model identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Maximum tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatParams {
    /// Create params from a conversation; the adapter fills in defaults.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }
}

/// Parameters for code generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeParams {
    /// What the code should do.
    pub prompt: String,

    /// Target language hint, folded into the vendor prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Model identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Maximum tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl CodeParams {
    /// Create params with only a prompt; the adapter fills in defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Parameters for text-to-speech synthesis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechParams {
    /// The text to speak.
    pub text: String,

    /// Voice identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<CompactString>,

    /// Synthesis model identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Voice stability, 0.0..=1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,

    /// Similarity boost, 0.0..=1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl SpeechParams {
    /// Create params with only the text; the adapter fills in defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}
