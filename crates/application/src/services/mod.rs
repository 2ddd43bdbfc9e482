//! Application services

mod session_service;
mod speech_request_service;

pub use session_service::SessionService;
pub use speech_request_service::{SpeechRequestService, SpokenAudio};
