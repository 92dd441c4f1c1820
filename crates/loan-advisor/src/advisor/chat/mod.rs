pub mod conversation;
pub mod speech;

pub use conversation::{Conversation, Message, MessageId, Sender};
pub use speech::{NullSynthesizer, SampleLanguage, SpeechError, SpeechRequest, SpeechSynthesizer};
