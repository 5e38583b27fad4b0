use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub generation: GenerationSettings,
    pub synthesis: SynthesisSettings,
}

impl Settings {
    /// Defaults matching the fixed local deployment, with environment
    /// overrides for the handful of values that differ between machines.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();
        if let Some(port) = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            settings.server.port = port;
        }
        if let Ok(url) = std::env::var("OLLAMA_URL") {
            settings.generation.base_url = url;
        }
        if let Ok(url) = std::env::var("KOKORO_URL") {
            settings.synthesis.base_url = url;
        }
        if let Ok(model) = std::env::var("WHISPER_MODEL") {
            settings.transcription.whisper_model = model;
        }
        settings
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    /// Hugging Face repo id of the Whisper model loaded at startup.
    pub whisper_model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            whisper_model: "openai/whisper-base".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub base_url: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub base_url: String,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8880".to_string(),
        }
    }
}
