use std::sync::{Arc, Mutex};

use crate::advisor::chat::{SpeechError, SpeechRequest, SpeechSynthesizer};
use crate::advisor::domain::{LoanNeedInput, LoanPurpose};
use crate::advisor::service::LoanAdvisorService;
use crate::config::SpeechConfig;

pub(super) fn need(purpose: LoanPurpose, amount: u64, has_collateral: bool) -> LoanNeedInput {
    LoanNeedInput {
        purpose,
        amount,
        has_collateral,
    }
}

pub(super) fn speech_config() -> SpeechConfig {
    SpeechConfig {
        language: "en-IN".to_string(),
        rate: 1.0,
        pitch: 1.0,
    }
}

pub(super) fn build_service() -> (
    LoanAdvisorService<RecordingSynthesizer>,
    Arc<RecordingSynthesizer>,
) {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let service = LoanAdvisorService::new(synthesizer.clone(), speech_config());
    (service, synthesizer)
}

/// Captures speech traffic so tests can assert on dispatched utterances.
#[derive(Default)]
pub(super) struct RecordingSynthesizer {
    spoken: Mutex<Vec<SpeechRequest>>,
    stops: Mutex<u32>,
}

impl RecordingSynthesizer {
    pub(super) fn spoken(&self) -> Vec<SpeechRequest> {
        self.spoken.lock().expect("speech mutex poisoned").clone()
    }

    pub(super) fn stop_count(&self) -> u32 {
        *self.stops.lock().expect("stop mutex poisoned")
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn stop(&self) -> Result<(), SpeechError> {
        *self.stops.lock().expect("stop mutex poisoned") += 1;
        Ok(())
    }

    fn speak(&self, request: SpeechRequest) -> Result<(), SpeechError> {
        self.spoken
            .lock()
            .expect("speech mutex poisoned")
            .push(request);
        Ok(())
    }
}

/// Synthesizer that always fails, for exercising the error path.
pub(super) struct OfflineSynthesizer;

impl SpeechSynthesizer for OfflineSynthesizer {
    fn stop(&self) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable("voice backend offline".to_string()))
    }

    fn speak(&self, _request: SpeechRequest) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable("voice backend offline".to_string()))
    }
}
