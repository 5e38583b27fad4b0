mod settings;

pub use settings::{
    GenerationSettings, ServerSettings, Settings, SynthesisSettings, TranscriptionSettings,
};
