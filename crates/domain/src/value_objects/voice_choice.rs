//! Voice choice value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The voice selection offered by the form
///
/// Whether this changes the produced audio depends on the active synthesis
/// engine: the cloud engine treats it as a label, the local engine selects a
/// matching voice variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceChoice {
    /// Female voice (default)
    #[default]
    Female,
    /// Male voice
    Male,
}

impl VoiceChoice {
    /// Lowercase identifier used in requests and config
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for VoiceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid voice: {s}. Use 'female' or 'male'"
            ))),
        }
    }
}
