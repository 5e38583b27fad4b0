use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, ResponseGenerator};

/// Client for a locally running Ollama instance.
///
/// Streaming is disabled; the whole reply arrives in one response. No
/// timeout is configured, matching the rest of the pipeline: a hung
/// inference service hangs the request.
pub struct OllamaGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaGenerator {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[async_trait]
impl ResponseGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        tracing::debug!(endpoint = %self.endpoint, model = model, "Requesting generation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateRequest {
                model,
                prompt,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| GenerationError::ServiceUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::ServiceUnreachable(format!("read body: {}", e)))?;

        // Anything that produced a body is usable: a well-formed reply gives
        // us its `response` field, everything else degrades to the raw body.
        match serde_json::from_str::<GenerateResponse>(&body) {
            Ok(parsed) => Ok(parsed.response),
            Err(e) => {
                tracing::warn!(
                    status = %status,
                    error = %e,
                    "Generation response was not parsable; returning raw body"
                );
                Ok(body)
            }
        }
    }
}
