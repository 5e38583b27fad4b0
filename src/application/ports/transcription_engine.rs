use std::path::Path;

use async_trait::async_trait;

/// Speech-to-text engine. Loaded once at process start and shared across
/// requests; implementations must be safe to call concurrently, serializing
/// internally where the underlying model is not.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Transcribe the audio file at `audio_path` to plain text.
    ///
    /// An empty string is a valid result for a clip with no recognizable
    /// speech; only engine-level failures are errors.
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read audio file: {0}")]
    FileRead(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcription failed: {0}")]
    EngineFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
}
