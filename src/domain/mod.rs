mod language;

pub use language::{Language, UnsupportedLanguage, VoiceProfile};
