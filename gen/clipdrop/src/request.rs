//! Multipart form for the Clipdrop text-to-image API.

use ecore::ImageParams;
use ecore::reqwest::multipart::Form;

/// The form fields for a text-to-image request, with defaults applied.
///
/// Kept as a plain struct so the field values are testable before being
/// consumed by the multipart encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageForm {
    /// The image description.
    pub prompt: String,
    /// Things the image must not contain. Omitted from the form when empty.
    pub negative_prompt: Option<String>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Inference steps.
    pub num_inference_steps: u32,
    /// Guidance scale.
    pub guidance_scale: f64,
}

impl From<&ImageParams> for ImageForm {
    fn from(params: &ImageParams) -> Self {
        Self {
            prompt: params.prompt.clone(),
            negative_prompt: params
                .negative_prompt
                .clone()
                .filter(|s| !s.is_empty()),
            width: params.width.unwrap_or(512),
            height: params.height.unwrap_or(512),
            num_inference_steps: params.steps.unwrap_or(50),
            guidance_scale: params.guidance.unwrap_or(7.5),
        }
    }
}

impl ImageForm {
    /// Encode as a multipart form.
    pub fn into_form(self) -> Form {
        let mut form = Form::new().text("prompt", self.prompt);
        if let Some(negative) = self.negative_prompt {
            form = form.text("negative_prompt", negative);
        }
        form.text("width", self.width.to_string())
            .text("height", self.height.to_string())
            .text("num_inference_steps", self.num_inference_steps.to_string())
            .text("guidance_scale", self.guidance_scale.to_string())
    }
}
