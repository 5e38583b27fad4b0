use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{SpeechSynthesizer, SynthesisEngine, SynthesisError};
use crate::domain::VoiceProfile;

/// Kokoro emits 24 kHz mono audio; the output file keeps that rate.
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;

/// Drives the synthesis engine segment by segment and assembles the output
/// waveform.
///
/// The reply text is split on runs of newlines; each non-empty chunk is one
/// engine invocation. Segment order is playback order, so samples are
/// concatenated exactly in generation order before the file is written.
pub struct KokoroSynthesizer {
    engine: Arc<dyn SynthesisEngine>,
}

impl KokoroSynthesizer {
    pub fn new(engine: Arc<dyn SynthesisEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl SpeechSynthesizer for KokoroSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        profile: &VoiceProfile,
        output_path: &Path,
    ) -> Result<(), SynthesisError> {
        let mut samples: Vec<f32> = Vec::new();
        let mut segments = 0usize;

        // split('\n') + the whitespace filter collapses newline runs into a
        // single segmentation boundary.
        for chunk in text.split('\n').filter(|c| !c.trim().is_empty()) {
            let segment = self
                .engine
                .synthesize_segment(chunk, profile.lang_code, profile.voice)
                .await?;
            if segment.is_empty() {
                continue;
            }
            tracing::debug!(
                segment = segments,
                samples = segment.len(),
                "Synthesized audio segment"
            );
            samples.extend_from_slice(&segment);
            segments += 1;
        }

        if segments == 0 {
            return Err(SynthesisError::NoAudioProduced);
        }

        write_wav(output_path, &samples)?;

        tracing::info!(
            segments = segments,
            samples = samples.len(),
            voice = profile.voice,
            "Synthesis completed"
        );

        Ok(())
    }
}

fn write_wav(path: &Path, samples: &[f32]) -> Result<(), SynthesisError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: OUTPUT_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| SynthesisError::WaveformWrite(e.to_string()))?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| SynthesisError::WaveformWrite(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| SynthesisError::WaveformWrite(e.to_string()))
}
