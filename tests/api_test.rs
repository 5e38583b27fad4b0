use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use voxbridge::application::ports::{
    GenerationError, ResponseGenerator, SpeechSynthesizer, SynthesisError, TranscriptionEngine,
    TranscriptionError,
};
use voxbridge::application::services::VoicePipelineService;
use voxbridge::domain::VoiceProfile;
use voxbridge::presentation::{create_router, AppState};

const BOUNDARY: &str = "voxbridge-test-boundary";
const WAV_STUB: &[u8] = b"RIFF-stub-waveform";

struct MockTranscriber;

#[async_trait]
impl TranscriptionEngine for MockTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        Ok("hello".to_string())
    }
}

#[derive(Default)]
struct RecordingGenerator {
    seen_model: Mutex<Option<String>>,
}

#[async_trait]
impl ResponseGenerator for RecordingGenerator {
    async fn generate(&self, _prompt: &str, model: &str) -> Result<String, GenerationError> {
        *self.seen_model.lock().unwrap() = Some(model.to_string());
        Ok("hi there".to_string())
    }
}

#[derive(Default)]
struct RecordingSynthesizer {
    seen_voice: Mutex<Option<String>>,
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        profile: &VoiceProfile,
        output_path: &Path,
    ) -> Result<(), SynthesisError> {
        *self.seen_voice.lock().unwrap() = Some(profile.voice.to_string());
        std::fs::write(output_path, WAV_STUB)
            .map_err(|e| SynthesisError::WaveformWrite(e.to_string()))
    }
}

fn test_app(
    generator: Arc<RecordingGenerator>,
    synthesizer: Arc<RecordingSynthesizer>,
) -> axum::Router {
    let pipeline = Arc::new(VoicePipelineService::new(
        Arc::new(MockTranscriber),
        generator,
        synthesizer,
        std::env::temp_dir(),
    ));
    create_router(AppState { pipeline })
}

fn multipart_request(
    audio: Option<&[u8]>,
    language: Option<&str>,
    model: Option<&str>,
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    if let Some(bytes) = audio {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"audio\"; \
                 filename=\"clip.wav\"\r\nContent-Type: audio/wav\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    for (name, value) in [("language", language), ("model", model)] {
        if let Some(value) = value {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                     name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/process_audio")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn given_valid_request_when_process_audio_then_returns_wav_attachment() {
    let generator = Arc::new(RecordingGenerator::default());
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let app = test_app(generator, synthesizer);

    let response = app
        .oneshot(multipart_request(Some(b"fake-audio"), Some("en-us"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/wav"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("response.wav"));

    assert_eq!(body_bytes(response).await, WAV_STUB);
}

#[tokio::test]
async fn given_unsupported_language_when_process_audio_then_400_listing_accepted_values() {
    let app = test_app(
        Arc::new(RecordingGenerator::default()),
        Arc::new(RecordingSynthesizer::default()),
    );

    let response = app
        .oneshot(multipart_request(Some(b"fake-audio"), Some("fr"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("en-us, en-gb, es, pt-br"), "body: {}", body);
}

#[tokio::test]
async fn given_missing_audio_field_when_process_audio_then_400() {
    let app = test_app(
        Arc::new(RecordingGenerator::default()),
        Arc::new(RecordingSynthesizer::default()),
    );

    let response = app
        .oneshot(multipart_request(None, Some("en-us"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("No audio file uploaded"), "body: {}", body);
}

#[tokio::test]
async fn given_no_model_field_when_process_audio_then_default_model_forwarded() {
    let generator = Arc::new(RecordingGenerator::default());
    let app = test_app(generator.clone(), Arc::new(RecordingSynthesizer::default()));

    let response = app
        .oneshot(multipart_request(Some(b"fake-audio"), None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        generator.seen_model.lock().unwrap().as_deref(),
        Some("llama3.1:8b")
    );
}

#[tokio::test]
async fn given_uppercase_language_when_process_audio_then_resolves_case_insensitively() {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let app = test_app(Arc::new(RecordingGenerator::default()), synthesizer.clone());

    let response = app
        .oneshot(multipart_request(Some(b"fake-audio"), Some("EN-GB"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        synthesizer.seen_voice.lock().unwrap().as_deref(),
        Some("bf_emma")
    );
}

#[tokio::test]
async fn given_unreadable_language_field_when_process_audio_then_400_names_the_field() {
    let app = test_app(
        Arc::new(RecordingGenerator::default()),
        Arc::new(RecordingSynthesizer::default()),
    );

    // The language part is cut off before its terminating boundary, so
    // reading its value fails mid-stream.
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"language\"\r\n\r\nen-"
    )
    .into_bytes();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/process_audio")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(
        body.contains("language"),
        "a broken field must be rejected, not defaulted; body: {}",
        body
    );
}

#[tokio::test]
async fn given_health_request_then_returns_healthy() {
    let app = test_app(
        Arc::new(RecordingGenerator::default()),
        Arc::new(RecordingSynthesizer::default()),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert_eq!(body, r#"{"status":"healthy"}"#);
}

#[tokio::test]
async fn given_preflight_from_allowed_origin_then_cors_headers_present() {
    let app = test_app(
        Arc::new(RecordingGenerator::default()),
        Arc::new(RecordingSynthesizer::default()),
    );

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/process_audio")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
