mod audio_decoder;
mod candle_whisper_engine;

pub use audio_decoder::{decode_to_pcm_16k, WHISPER_SAMPLE_RATE};
pub use candle_whisper_engine::CandleWhisperEngine;
