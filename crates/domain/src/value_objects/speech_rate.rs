//! Speech rate value object
//!
//! Represents a validated speaking rate in words per minute (100-300).
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{SpeechRate, SpeedClass};
//!
//! // Create a valid rate
//! let rate = SpeechRate::new(200).expect("valid rate");
//! assert_eq!(rate.value(), 200);
//!
//! // Out-of-range values return an error
//! assert!(SpeechRate::new(500).is_err());
//!
//! // Clamp out-of-range values
//! let clamped = SpeechRate::clamped(500);
//! assert_eq!(clamped.value(), 300);
//!
//! // Coarse mapping for engines that only know "normal" and "slow"
//! assert_eq!(SpeechRate::clamped(120).speed_class(), SpeedClass::Slow);
//! assert_eq!(rate.speed_class(), SpeedClass::Normal);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a speech rate is out of range
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid speech rate: {0} wpm is out of range (must be 100-300)")]
pub struct InvalidSpeechRate(u16);

/// Coarse speed distinction supported by engines without a continuous rate
///
/// The cloud backend exposes only two speed modes, so any numeric rate is
/// mapped onto one of these before the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedClass {
    /// Engine default speed
    Normal,
    /// Reduced speed
    Slow,
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Slow => write!(f, "slow"),
        }
    }
}

/// Speaking rate in words per minute (100-300)
///
/// This value object ensures rates are always within the bounds the form
/// exposes. Rates at or below [`SpeechRate::SLOW_THRESHOLD`] map to
/// [`SpeedClass::Slow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SpeechRate(u16);

impl SpeechRate {
    /// Minimum valid rate
    pub const MIN: u16 = 100;

    /// Maximum valid rate
    pub const MAX: u16 = 300;

    /// Default rate
    pub const DEFAULT: u16 = 200;

    /// Rates at or below this value are considered "slow"
    pub const SLOW_THRESHOLD: u16 = 150;

    /// Create a new validated speech rate
    ///
    /// # Errors
    ///
    /// Returns `InvalidSpeechRate` if the value is outside 100-300.
    pub const fn new(value: u16) -> Result<Self, InvalidSpeechRate> {
        if value < Self::MIN || value > Self::MAX {
            Err(InvalidSpeechRate(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a speech rate, clamping to the valid range
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::SpeechRate;
    ///
    /// assert_eq!(SpeechRate::clamped(50).value(), 100);
    /// assert_eq!(SpeechRate::clamped(200).value(), 200);
    /// assert_eq!(SpeechRate::clamped(1000).value(), 300);
    /// ```
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Get the rate in words per minute
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Map the numeric rate onto the coarse normal/slow distinction
    #[must_use]
    pub const fn speed_class(self) -> SpeedClass {
        if self.0 <= Self::SLOW_THRESHOLD {
            SpeedClass::Slow
        } else {
            SpeedClass::Normal
        }
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wpm", self.0)
    }
}

impl TryFrom<u16> for SpeechRate {
    type Error = InvalidSpeechRate;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpeechRate> for u16 {
    fn from(rate: SpeechRate) -> Self {
        rate.0
    }
}

/// Custom deserialization that validates the rate
impl<'de> Deserialize<'de> for SpeechRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert!(SpeechRate::new(100).is_ok());
        assert!(SpeechRate::new(200).is_ok());
        assert!(SpeechRate::new(300).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(SpeechRate::new(99).is_err());
        assert!(SpeechRate::new(301).is_err());
        assert_eq!(
            SpeechRate::new(999).unwrap_err().to_string(),
            "invalid speech rate: 999 wpm is out of range (must be 100-300)"
        );
    }

    #[test]
    fn clamped_saturates_to_bounds() {
        assert_eq!(SpeechRate::clamped(0).value(), 100);
        assert_eq!(SpeechRate::clamped(100).value(), 100);
        assert_eq!(SpeechRate::clamped(250).value(), 250);
        assert_eq!(SpeechRate::clamped(300).value(), 300);
        assert_eq!(SpeechRate::clamped(u16::MAX).value(), 300);
    }

    #[test]
    fn default_is_200() {
        assert_eq!(SpeechRate::default().value(), 200);
    }

    #[test]
    fn speed_class_mapping() {
        assert_eq!(SpeechRate::clamped(100).speed_class(), SpeedClass::Slow);
        assert_eq!(SpeechRate::clamped(150).speed_class(), SpeedClass::Slow);
        assert_eq!(SpeechRate::clamped(151).speed_class(), SpeedClass::Normal);
        assert_eq!(SpeechRate::clamped(200).speed_class(), SpeedClass::Normal);
        assert_eq!(SpeechRate::clamped(300).speed_class(), SpeedClass::Normal);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", SpeechRate::clamped(180)), "180 wpm");
        assert_eq!(format!("{}", SpeedClass::Normal), "normal");
        assert_eq!(format!("{}", SpeedClass::Slow), "slow");
    }

    #[test]
    fn try_from_u16() {
        assert!(SpeechRate::try_from(200u16).is_ok());
        assert!(SpeechRate::try_from(400u16).is_err());
    }

    #[test]
    fn into_u16() {
        let rate = SpeechRate::new(220).unwrap();
        let value: u16 = rate.into();
        assert_eq!(value, 220);
    }

    #[test]
    fn serialization() {
        let rate = SpeechRate::new(250).unwrap();
        let json = serde_json::to_string(&rate).expect("serialize");
        assert_eq!(json, "250");
    }

    #[test]
    fn deserialization_valid() {
        let rate: SpeechRate = serde_json::from_str("150").expect("deserialize");
        assert_eq!(rate.value(), 150);
    }

    #[test]
    fn deserialization_invalid() {
        let result: Result<SpeechRate, _> = serde_json::from_str("400");
        assert!(result.is_err());
    }

    #[test]
    fn speed_class_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SpeedClass::Normal).unwrap(),
            "\"normal\""
        );
        assert_eq!(serde_json::to_string(&SpeedClass::Slow).unwrap(), "\"slow\"");
    }

    #[test]
    fn ordering() {
        let slow = SpeechRate::clamped(120);
        let fast = SpeechRate::clamped(280);
        assert!(slow < fast);
    }
}
