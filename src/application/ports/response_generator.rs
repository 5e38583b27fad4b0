use async_trait::async_trait;

/// Text-generation service reachable over a local network call.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Send `prompt` to the service, addressed at `model`, and wait for the
    /// complete reply (streaming disabled).
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Transport-level failure: the service never produced a response body.
    /// Responses that arrive but cannot be parsed degrade to raw text
    /// instead of raising this.
    #[error("generation service unreachable: {0}")]
    ServiceUnreachable(String),
}
