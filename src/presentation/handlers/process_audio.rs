use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::Language;
use crate::presentation::state::AppState;

const DEFAULT_MODEL: &str = "llama3.1:8b";
const DEFAULT_LANGUAGE: &str = "en-us";
const RESPONSE_FILENAME: &str = "response.wav";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

/// `POST /process_audio`: multipart form with a required `audio` part and
/// optional `model` and `language` parts. Replies with the synthesized
/// answer as a WAV attachment.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut audio: Option<Bytes> = None;
    let mut model = DEFAULT_MODEL.to_string();
    let mut language_tag = DEFAULT_LANGUAGE.to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return bad_request(format!("Failed to read multipart body: {}", e));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => match field.bytes().await {
                Ok(bytes) => audio = Some(bytes),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read audio upload");
                    return bad_request(format!("Failed to read audio upload: {}", e));
                }
            },
            "model" => match field.text().await {
                Ok(value) => model = value,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read model field");
                    return bad_request(format!("Failed to read model field: {}", e));
                }
            },
            "language" => match field.text().await {
                Ok(value) => language_tag = value,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read language field");
                    return bad_request(format!("Failed to read language field: {}", e));
                }
            },
            other => {
                tracing::debug!(field = other, "Ignoring unknown form field");
            }
        }
    }

    // Validate the language before any downstream work; an unsupported tag
    // must not create temp files or touch the engines.
    let language = match Language::from_tag(&language_tag) {
        Ok(language) => language,
        Err(e) => {
            tracing::warn!(tag = %e.tag, "Rejected unsupported language");
            return bad_request(format!(
                "Invalid language parameter. Accepted values: {}.",
                Language::ACCEPTED_TAGS.join(", ")
            ));
        }
    };

    let Some(audio) = audio else {
        tracing::warn!("Request without an audio field");
        return bad_request("No audio file uploaded".to_string());
    };

    match state.pipeline.run(&audio, language, &model).await {
        Ok(waveform) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/wav".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", RESPONSE_FILENAME),
                ),
            ],
            waveform,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Audio pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Audio processing failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
