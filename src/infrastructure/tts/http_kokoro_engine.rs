use std::io::Cursor;

use async_trait::async_trait;
use hound::SampleFormat;
use serde::Serialize;

use crate::application::ports::{SynthesisEngine, SynthesisError};

/// Playback speed is fixed at normal.
const SPEED: f32 = 1.0;

/// Client for a locally running Kokoro inference server exposing the
/// OpenAI-compatible speech endpoint. Each call synthesizes one text segment
/// for one (language code, voice) configuration.
pub struct HttpKokoroEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpKokoroEngine {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/v1/audio/speech", base_url.trim_end_matches('/')),
        }
    }
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    lang_code: &'a str,
    response_format: &'a str,
    speed: f32,
}

#[async_trait]
impl SynthesisEngine for HttpKokoroEngine {
    async fn synthesize_segment(
        &self,
        text: &str,
        lang_code: &str,
        voice: &str,
    ) -> Result<Vec<f32>, SynthesisError> {
        tracing::debug!(endpoint = %self.endpoint, voice = voice, "Requesting speech segment");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SpeechRequest {
                model: "kokoro",
                input: text,
                voice,
                lang_code,
                response_format: "wav",
                speed: SPEED,
            })
            .send()
            .await
            .map_err(|e| SynthesisError::EngineFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::EngineFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::EngineFailed(format!("read body: {}", e)))?;

        decode_wav_samples(&bytes)
    }
}

/// Extract mono f32 samples from the engine's WAV response.
fn decode_wav_samples(bytes: &[u8]) -> Result<Vec<f32>, SynthesisError> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))
        .map_err(|e| SynthesisError::EngineFailed(format!("wav header: {}", e)))?;
    let spec = reader.spec();

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<Vec<f32>, _>>()
            .map_err(|e| SynthesisError::EngineFailed(format!("wav samples: {}", e)))?,
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32_768.0))
            .collect::<Result<Vec<f32>, _>>()
            .map_err(|e| SynthesisError::EngineFailed(format!("wav samples: {}", e)))?,
        (format, bits) => {
            return Err(SynthesisError::EngineFailed(format!(
                "unsupported wav sample format: {:?}/{} bit",
                format, bits
            )));
        }
    };

    Ok(samples)
}
