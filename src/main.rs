use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxbridge::application::ports::{
    ResponseGenerator, SpeechSynthesizer, SynthesisEngine, TranscriptionEngine,
};
use voxbridge::application::services::VoicePipelineService;
use voxbridge::infrastructure::audio::CandleWhisperEngine;
use voxbridge::infrastructure::llm::OllamaGenerator;
use voxbridge::infrastructure::observability::init_tracing;
use voxbridge::infrastructure::tts::{HttpKokoroEngine, KokoroSynthesizer};
use voxbridge::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(settings.server.port);

    // The Whisper model is loaded once here and shared across requests.
    let transcription: Arc<dyn TranscriptionEngine> = Arc::new(
        CandleWhisperEngine::new(&settings.transcription.whisper_model)
            .context("failed to load transcription model")?,
    );
    let generator: Arc<dyn ResponseGenerator> =
        Arc::new(OllamaGenerator::new(&settings.generation.base_url));
    let engine: Arc<dyn SynthesisEngine> =
        Arc::new(HttpKokoroEngine::new(&settings.synthesis.base_url));
    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(KokoroSynthesizer::new(engine));

    let pipeline = Arc::new(VoicePipelineService::new(
        transcription,
        generator,
        synthesizer,
        std::env::temp_dir(),
    ));

    let router = create_router(AppState { pipeline });

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .context("invalid server host")?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
