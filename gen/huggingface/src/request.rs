//! Request bodies for the Hugging Face hosted inference API.

use ecore::{GenError, ImageParams, Reply, TextParams};
use serde::{Deserialize, Serialize};

/// The request body for text generation.
#[derive(Debug, Clone, Serialize)]
pub struct TextRequest {
    /// The prompt.
    pub inputs: String,
    /// Generation parameters.
    pub parameters: TextParameters,
}

/// Text generation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct TextParameters {
    /// Maximum new tokens to generate.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Top-p sampling.
    pub top_p: f64,
    /// Top-k sampling.
    pub top_k: u32,
    /// Repetition penalty.
    pub repetition_penalty: f64,
}

impl From<&TextParams> for TextRequest {
    fn from(params: &TextParams) -> Self {
        Self {
            inputs: params.prompt.clone(),
            parameters: TextParameters {
                max_new_tokens: params.max_tokens.unwrap_or(800),
                temperature: params.temperature.unwrap_or(0.7),
                top_p: 0.95,
                top_k: 50,
                repetition_penalty: 1.1,
            },
        }
    }
}

/// The request body for stable diffusion image generation.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// The image description.
    pub inputs: String,
    /// Diffusion parameters.
    pub parameters: ImageParameters,
}

/// Diffusion parameters.
#[derive(Debug, Clone, Serialize)]
pub struct ImageParameters {
    /// Things the image must not contain.
    pub negative_prompt: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Inference steps.
    pub num_inference_steps: u32,
    /// Guidance scale.
    pub guidance_scale: f64,
}

impl From<&ImageParams> for ImageRequest {
    fn from(params: &ImageParams) -> Self {
        Self {
            inputs: params.prompt.clone(),
            parameters: ImageParameters {
                negative_prompt: params.negative_prompt.clone().unwrap_or_default(),
                width: params.width.unwrap_or(512),
                height: params.height.unwrap_or(512),
                num_inference_steps: params.steps.unwrap_or(50),
                guidance_scale: params.guidance.unwrap_or(7.5),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}

/// Extract `[0].generated_text` from a reply.
pub(crate) fn extract_text(reply: &Reply) -> Result<String, GenError> {
    let resp: Vec<Generation> = reply.json()?;
    resp.into_iter()
        .next()
        .map(|g| g.generated_text)
        .ok_or_else(|| reply.malformed("no text generated"))
}

#[cfg(test)]
mod tests {
    use super::{ImageRequest, TextRequest, extract_text};
    use ecore::{ImageParams, ProviderId, Reply, TextParams};

    #[test]
    fn text_request_uses_original_sampling_defaults() {
        let body = serde_json::to_value(TextRequest::from(&TextParams::new("a riddle"))).unwrap();
        assert_eq!(body["inputs"], "a riddle");
        assert_eq!(body["parameters"]["max_new_tokens"], 800);
        assert_eq!(body["parameters"]["temperature"], 0.7);
        assert_eq!(body["parameters"]["top_p"], 0.95);
        assert_eq!(body["parameters"]["top_k"], 50);
        assert_eq!(body["parameters"]["repetition_penalty"], 1.1);
    }

    #[test]
    fn image_request_uses_diffusion_defaults() {
        let body = serde_json::to_value(ImageRequest::from(&ImageParams::new("a fox"))).unwrap();
        assert_eq!(body["inputs"], "a fox");
        assert_eq!(body["parameters"]["negative_prompt"], "");
        assert_eq!(body["parameters"]["width"], 512);
        assert_eq!(body["parameters"]["height"], 512);
        assert_eq!(body["parameters"]["num_inference_steps"], 50);
        assert_eq!(body["parameters"]["guidance_scale"], 7.5);
    }

    #[test]
    fn extract_text_reads_the_first_generation() {
        let body = r#"[{"generated_text":"once upon a time"}]"#;
        let reply = Reply::new(ProviderId::HuggingFace, 200, None, body.as_bytes().to_vec());
        assert_eq!(extract_text(&reply).unwrap(), "once upon a time");
    }

    #[test]
    fn empty_generation_list_is_a_vendor_error() {
        let reply = Reply::new(ProviderId::HuggingFace, 200, None, b"[]".to_vec());
        assert!(extract_text(&reply).is_err());
    }
}
