//! Client for the Gemini image generation API.
//!
//! One request per invocation: post the prompt, walk the candidates for the
//! first inline image part, decode it. No retries and no explicit timeout
//! beyond the transport defaults.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::constants::{GEMINI_API_BASE, THUMBNAIL_ASPECT_RATIO};

/// A decoded image returned by the generation service.
#[derive(Clone, Debug)]
pub struct GeneratedImage {
    /// Raw image bytes.
    pub bytes: Vec<u8>,
    /// MIME type reported by the service, e.g. `image/png`.
    pub mime_type: String,
}

/// Failures surfaced by one generation attempt.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The network call failed or the service returned a non-success status.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response carried no candidate content.
    #[error("no candidates returned from the API")]
    NoCandidates,
    /// Candidates were present but none carried inline image data.
    #[error("no image data found in the response")]
    NoImageData,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}

/// Anything that can turn a prompt into an image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Runs one generation request to completion.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError>;
}

/// Gemini-backed image generator.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

impl GeminiClient {
    /// Builds a client against the production API.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Builds a client against an alternate endpoint, used in tests.
    pub fn with_api_base(api_key: String, model: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            api_base,
        }
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let payload = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": { "aspectRatio": THUMBNAIL_ASPECT_RATIO }
            }
        });

        debug!("Requesting thumbnail from model {}", self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(format!(
                "API returned status {status}: {body}"
            )));
        }

        let parsed = response.json::<GeminiResponse>().await?;
        let candidates = parsed.candidates.unwrap_or_default();
        if candidates.is_empty() {
            return Err(GenerationError::NoCandidates);
        }

        for candidate in candidates {
            let parts = candidate
                .content
                .and_then(|content| content.parts)
                .unwrap_or_default();
            for part in parts {
                let Some(inline) = part.inline_data else {
                    continue;
                };
                if !inline.mime_type.starts_with("image/") {
                    continue;
                }
                // an undecodable payload is not usable image data
                let bytes = match general_purpose::STANDARD.decode(inline.data) {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        warn!("Discarding undecodable inline image payload: {}", err);
                        continue;
                    }
                };
                return Ok(GeneratedImage {
                    bytes,
                    mime_type: inline.mime_type,
                });
            }
        }

        Err(GenerationError::NoImageData)
    }
}
