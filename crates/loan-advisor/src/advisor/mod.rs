//! Loan advisory chat, classification, and speech scaffolding.

pub mod chat;
pub mod classifier;
pub mod domain;
pub mod service;

#[cfg(test)]
mod tests;

pub use chat::{
    Conversation, Message, MessageId, NullSynthesizer, SampleLanguage, Sender, SpeechError,
    SpeechRequest, SpeechSynthesizer,
};
pub use classifier::recommend;
pub use domain::{LoanNeedInput, LoanPurpose, LoanRecommendation, ReasonKey};
pub use service::{AdvisorServiceError, LoanAdvisorService, SCRIPTED_ADVISOR_REPLY};
