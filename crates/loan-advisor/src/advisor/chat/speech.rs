use serde::{Deserialize, Serialize};

use crate::config::SpeechConfig;

/// Languages with a canned advisor greeting and a matching voice tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleLanguage {
    English,
    Hindi,
    Kannada,
}

impl SampleLanguage {
    pub const ALL: [SampleLanguage; 3] = [
        SampleLanguage::English,
        SampleLanguage::Hindi,
        SampleLanguage::Kannada,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SampleLanguage::English => "en",
            SampleLanguage::Hindi => "hi",
            SampleLanguage::Kannada => "kn",
        }
    }

    /// BCP-47 tag handed to the synthesizer for this language.
    pub const fn voice_tag(self) -> &'static str {
        match self {
            SampleLanguage::English => "en-IN",
            SampleLanguage::Hindi => "hi-IN",
            SampleLanguage::Kannada => "kn-IN",
        }
    }

    pub const fn greeting(self) -> &'static str {
        match self {
            SampleLanguage::English => {
                "Hi, I am your AI loan advisor. I will explain your loan eligibility in simple steps."
            }
            SampleLanguage::Hindi => {
                "नमस्ते, मैं आपका एआई लोन सलाहकार हूँ। मैं आपको सरल भाषा में लोन पात्रता समझाऊँगा।"
            }
            SampleLanguage::Kannada => {
                "ನಮಸ್ಕಾರ, ನಾನು ನಿಮ್ಮ ಎಐ ಸಾಲ ಸಲಹೆಗಾರ. ನಾನು ನಿಮ್ಮ ಸಾಲ ಅರ್ಹತೆಯನ್ನು ಸರಳವಾಗಿ ವಿವರಿಸುತ್ತೇನೆ."
            }
        }
    }
}

/// Playback parameters for a single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    pub fn from_config(text: impl Into<String>, config: &SpeechConfig) -> Self {
        Self {
            text: text.into(),
            language: config.language.clone(),
            rate: config.rate,
            pitch: config.pitch,
        }
    }

    /// Canned greeting for a sample language, spoken through the
    /// language-matched voice tag with the configured playback dials.
    pub fn sample_greeting(language: SampleLanguage, config: &SpeechConfig) -> Self {
        Self {
            text: language.greeting().to_string(),
            language: language.voice_tag().to_string(),
            rate: config.rate,
            pitch: config.pitch,
        }
    }
}

/// Trait describing the outbound text-to-speech hook so the advisory service
/// can be exercised without a platform voice backend.
pub trait SpeechSynthesizer: Send + Sync {
    /// Cancel any utterance currently playing.
    fn stop(&self) -> Result<(), SpeechError>;

    fn speak(&self, request: SpeechRequest) -> Result<(), SpeechError>;
}

/// Speech dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech backend unavailable: {0}")]
    Unavailable(String),
}

/// Production default when no voice backend is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn speak(&self, _request: SpeechRequest) -> Result<(), SpeechError> {
        Ok(())
    }
}
