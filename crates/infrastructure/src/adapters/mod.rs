//! Adapters implementing application ports

mod speech_adapter;

pub use speech_adapter::TtsEngineAdapter;
