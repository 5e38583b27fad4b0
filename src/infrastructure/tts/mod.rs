mod http_kokoro_engine;
mod kokoro_synthesizer;

pub use http_kokoro_engine::HttpKokoroEngine;
pub use kokoro_synthesizer::{KokoroSynthesizer, OUTPUT_SAMPLE_RATE};
