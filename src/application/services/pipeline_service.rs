use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    GenerationError, ResponseGenerator, SpeechSynthesizer, SynthesisError, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::Language;

use super::scoped_temp::ScopedTempFile;

/// The four-stage request pipeline: stage the upload, transcribe it,
/// generate a reply, synthesize the reply to a waveform.
///
/// Stages run strictly sequentially. Both temporary files are owned by
/// scoped guards, so the input file is removed on every exit path and the
/// output file is removed once its bytes have been read back.
pub struct VoicePipelineService {
    transcription: Arc<dyn TranscriptionEngine>,
    generator: Arc<dyn ResponseGenerator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    staging_dir: PathBuf,
}

impl VoicePipelineService {
    pub fn new(
        transcription: Arc<dyn TranscriptionEngine>,
        generator: Arc<dyn ResponseGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            transcription,
            generator,
            synthesizer,
            staging_dir,
        }
    }

    /// Run the pipeline for one request and return the synthesized WAV bytes.
    ///
    /// `language` has already been validated at the edge; no downstream work
    /// happens for an unsupported tag.
    #[tracing::instrument(
        skip(self, audio),
        fields(bytes = audio.len(), language = %language, model = model)
    )]
    pub async fn run(
        &self,
        audio: &[u8],
        language: Language,
        model: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let profile = language.voice_profile();

        let input = ScopedTempFile::unique(&self.staging_dir, "voice", "wav");
        tokio::fs::write(input.path(), audio)
            .await
            .map_err(PipelineError::InputStaging)?;

        let transcript = self.transcription.transcribe(input.path()).await?;
        tracing::info!(chars = transcript.len(), "Transcription completed");

        let reply = self.generator.generate(&transcript, model).await?;
        tracing::info!(chars = reply.len(), "Reply generated");

        let output = ScopedTempFile::at(synthesized_path(input.path()));
        self.synthesizer
            .synthesize(&reply, &profile, output.path())
            .await?;

        let waveform = tokio::fs::read(output.path())
            .await
            .map_err(PipelineError::OutputRead)?;
        tracing::info!(bytes = waveform.len(), "Synthesized reply ready");

        Ok(waveform)
    }
}

fn synthesized_path(input: &std::path::Path) -> PathBuf {
    let mut os = input.as_os_str().to_owned();
    os.push("_synthesized.wav");
    PathBuf::from(os)
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to stage uploaded audio: {0}")]
    InputStaging(std::io::Error),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("failed to read synthesized audio: {0}")]
    OutputRead(std::io::Error),
}
