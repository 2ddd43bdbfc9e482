//! Sample text presets
//!
//! The quick-insert texts offered next to the form. Applying a preset
//! replaces the session's text buffer with the preset's fixed string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A fixed sample text that can be inserted into the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplePreset {
    /// Friendly greeting
    Hello,
    /// Welcome message
    Welcome,
    /// Appreciation message
    Love,
    /// Generic filler text
    Lorem,
}

impl SamplePreset {
    /// All presets, in display order
    pub const ALL: [Self; 4] = [Self::Hello, Self::Welcome, Self::Love, Self::Lorem];

    /// The fixed text this preset inserts
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Hello => "Hello, how are you today? I hope you're enjoying Vocalize Pro!",
            Self::Welcome => "Welcome to Vocalize Pro - your premium text to speech solution!",
            Self::Love => "I just wanted to say I appreciate you. Have a wonderful day!",
            Self::Lorem => {
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam in dui mauris."
            },
        }
    }

    /// Lowercase identifier used in routes
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Welcome => "welcome",
            Self::Love => "love",
            Self::Lorem => "lorem",
        }
    }
}

impl fmt::Display for SamplePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SamplePreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "welcome" => Ok(Self::Welcome),
            "love" => Ok(Self::Love),
            "lorem" => Ok(Self::Lorem),
            _ => Err(DomainError::UnknownPreset(s.to_string())),
        }
    }
}
