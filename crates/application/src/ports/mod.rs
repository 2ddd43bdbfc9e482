//! Application ports - interfaces to infrastructure

mod session_store;
mod speech_port;

pub use session_store::SessionStore;
pub use speech_port::{SpeechPort, SynthesisResult, VoiceInfo};

#[cfg(test)]
pub use session_store::MockSessionStore;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
