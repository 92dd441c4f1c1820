use loan_advisor::advisor::{
    LoanPurpose, SampleLanguage, SpeechError, SpeechRequest, SpeechSynthesizer,
};
use tracing::info;

pub(crate) fn parse_purpose(raw: &str) -> Result<LoanPurpose, String> {
    // Unknown purposes intentionally succeed as the fallback branch.
    Ok(LoanPurpose::parse(raw))
}

pub(crate) fn parse_sample_language(raw: &str) -> Result<SampleLanguage, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "en" | "english" => Ok(SampleLanguage::English),
        "hi" | "hindi" => Ok(SampleLanguage::Hindi),
        "kn" | "kannada" => Ok(SampleLanguage::Kannada),
        other => Err(format!(
            "unsupported sample language '{other}' (expected en, hi, or kn)"
        )),
    }
}

/// Console stand-in for a platform voice backend: renders each utterance
/// instead of playing it.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ConsoleSynthesizer;

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn stop(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn speak(&self, request: SpeechRequest) -> Result<(), SpeechError> {
        info!(
            language = %request.language,
            rate = request.rate,
            pitch = request.pitch,
            "speaking advisor reply"
        );
        println!("[speech {}] {}", request.language, request.text);
        Ok(())
    }
}
