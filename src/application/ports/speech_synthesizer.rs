use std::path::Path;

use async_trait::async_trait;

use crate::domain::VoiceProfile;

use super::SynthesisError;

/// Speech synthesis adapter: turns reply text into a waveform file for the
/// given voice profile. Splitting the text into engine segments and
/// concatenating them in order is the implementation's responsibility.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        profile: &VoiceProfile,
        output_path: &Path,
    ) -> Result<(), SynthesisError>;
}
