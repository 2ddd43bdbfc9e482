//! Value Objects - Immutable, identity-less domain primitives

mod sample_preset;
mod session_id;
mod speech_rate;
mod voice_choice;

pub use sample_preset::SamplePreset;
pub use session_id::SessionId;
pub use speech_rate::{InvalidSpeechRate, SpeechRate, SpeedClass};
pub use voice_choice::VoiceChoice;
