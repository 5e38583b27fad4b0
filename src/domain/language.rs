use std::fmt;

/// Language tag accepted by the pipeline.
///
/// Each tag resolves to exactly one Kokoro language code and voice; the
/// mapping is fixed and validated before any pipeline stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    EnUs,
    EnGb,
    Es,
    PtBr,
}

impl Language {
    pub const ACCEPTED_TAGS: [&'static str; 4] = ["en-us", "en-gb", "es", "pt-br"];

    /// Parse a user-supplied tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Result<Self, UnsupportedLanguage> {
        match tag.to_lowercase().as_str() {
            "en-us" => Ok(Language::EnUs),
            "en-gb" => Ok(Language::EnGb),
            "es" => Ok(Language::Es),
            "pt-br" => Ok(Language::PtBr),
            _ => Err(UnsupportedLanguage {
                tag: tag.to_string(),
            }),
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::EnUs => "en-us",
            Language::EnGb => "en-gb",
            Language::Es => "es",
            Language::PtBr => "pt-br",
        }
    }

    /// The (language code, voice) pair used to drive speech synthesis.
    pub fn voice_profile(&self) -> VoiceProfile {
        match self {
            Language::EnUs => VoiceProfile {
                lang_code: "a",
                voice: "af_heart",
            },
            Language::EnGb => VoiceProfile {
                lang_code: "b",
                voice: "bf_emma",
            },
            Language::Es => VoiceProfile {
                lang_code: "e",
                voice: "ef_dora",
            },
            Language::PtBr => VoiceProfile {
                lang_code: "p",
                voice: "pf_dora",
            },
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Short engine-internal language code plus the voice identifier within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub lang_code: &'static str,
    pub voice: &'static str,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language tag: {tag}. Accepted values: en-us, en-gb, es, pt-br")]
pub struct UnsupportedLanguage {
    pub tag: String,
}
