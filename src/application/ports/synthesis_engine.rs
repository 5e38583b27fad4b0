use async_trait::async_trait;

/// Low-level text-to-speech engine: one invocation per text segment and
/// (language code, voice) configuration, producing mono samples at 24 kHz.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    async fn synthesize_segment(
        &self,
        text: &str,
        lang_code: &str,
        voice: &str,
    ) -> Result<Vec<f32>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis engine failed: {0}")]
    EngineFailed(String),
    #[error("no audio was generated")]
    NoAudioProduced,
    #[error("failed to write waveform: {0}")]
    WaveformWrite(String),
}
