use std::sync::Arc;

use super::chat::{
    Conversation, Message, SampleLanguage, Sender, SpeechError, SpeechRequest, SpeechSynthesizer,
};
use super::classifier;
use super::domain::{LoanNeedInput, LoanRecommendation};
use crate::config::SpeechConfig;

/// Scripted reply standing in for the future guidance engine.
pub const SCRIPTED_ADVISOR_REPLY: &str =
    "This is a sample loan advisor reply. Later this will show real AI guidance.";

/// Service composing the conversation transcript, the classifier, and the
/// speech seam.
pub struct LoanAdvisorService<S> {
    conversation: Conversation,
    synthesizer: Arc<S>,
    speech: SpeechConfig,
}

impl<S> LoanAdvisorService<S>
where
    S: SpeechSynthesizer + 'static,
{
    pub fn new(synthesizer: Arc<S>, speech: SpeechConfig) -> Self {
        Self {
            conversation: Conversation::new(),
            synthesizer,
            speech,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Append a user message and the scripted advisor reply, returning the
    /// reply. Blank input is rejected before anything lands in the transcript.
    pub fn send_message(&mut self, text: &str) -> Result<Message, AdvisorServiceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AdvisorServiceError::EmptyMessage);
        }

        let user = Message::now(Sender::User, trimmed);
        let reply = Message::now(Sender::Advisor, SCRIPTED_ADVISOR_REPLY);

        self.conversation = self.conversation.append(user).append(reply.clone());
        Ok(reply)
    }

    /// Classify a loan need and append an advisor message describing the
    /// recommendation to the transcript.
    pub fn recommend(&mut self, input: &LoanNeedInput) -> LoanRecommendation {
        let recommendation = classifier::recommend(input);
        let reply = Message::now(
            Sender::Advisor,
            format!("Recommended product: {}", recommendation.summary()),
        );
        self.conversation = self.conversation.append(reply);
        recommendation
    }

    /// Speak the last advisor reply through the configured synthesizer.
    /// Returns the dispatched request, or `None` when the transcript has no
    /// advisor reply yet.
    pub fn speak_last_reply(&self) -> Result<Option<SpeechRequest>, AdvisorServiceError> {
        let Some(reply) = self.conversation.last_advisor_reply() else {
            return Ok(None);
        };

        let request = SpeechRequest::from_config(reply.text.clone(), &self.speech);

        self.synthesizer.stop()?;
        self.synthesizer.speak(request.clone())?;

        Ok(Some(request))
    }

    /// Speak the canned advisor greeting for the chosen language, so callers
    /// can preview each supported voice without a transcript.
    pub fn speak_sample(
        &self,
        language: SampleLanguage,
    ) -> Result<SpeechRequest, AdvisorServiceError> {
        let request = SpeechRequest::sample_greeting(language, &self.speech);

        self.synthesizer.stop()?;
        self.synthesizer.speak(request.clone())?;

        Ok(request)
    }
}

/// Error raised by the advisory service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error("message text is empty")]
    EmptyMessage,
    #[error(transparent)]
    Speech(#[from] SpeechError),
}
