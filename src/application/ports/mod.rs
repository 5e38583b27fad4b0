mod response_generator;
mod speech_synthesizer;
mod synthesis_engine;
mod transcription_engine;

pub use response_generator::{GenerationError, ResponseGenerator};
pub use speech_synthesizer::SpeechSynthesizer;
pub use synthesis_engine::{SynthesisEngine, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
