//! Speech - Text-to-Speech abstractions for Vocalize
//!
//! Provides the `TextToSpeech` trait and the concrete engine adapters.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Engines
//!
//! - Google Translate TTS (cloud, MP3 output, two speed modes)
//! - espeak-ng (local, WAV output, continuous rate and voice variants)
//!
//! # Example
//!
//! ```ignore
//! use domain::{SpeechRate, VoiceChoice};
//! use speech::{SpeechConfig, create_provider};
//!
//! let provider = create_provider(&SpeechConfig::default())?;
//! let audio = provider
//!     .synthesize("Hello, world!", VoiceChoice::Female, SpeechRate::default())
//!     .await?;
//! assert!(!audio.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{EspeakConfig, SpeechConfig, TtsProvider};
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::create_provider;
pub use providers::espeak::EspeakProvider;
pub use providers::gtts::GoogleTranslateProvider;
pub use types::{AudioData, AudioFormat, VoiceInfo};
