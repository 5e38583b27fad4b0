mod health;
mod process_audio;

pub use health::health_handler;
pub use process_audio::process_audio_handler;
