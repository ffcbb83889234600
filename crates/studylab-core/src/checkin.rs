//! Daily self-report of mood, energy, and sleep.
//!
//! The check-in is the sole input to budget derivation and difficulty
//! gating. Mood and energy are 1..=5 ratings; sleep is hours as a float.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Display labels for the 1..=5 mood scale.
pub const MOOD_LABELS: [&str; 5] = ["Very low", "Low", "Okay", "Good", "Great"];

/// Display labels for the 1..=5 energy scale.
pub const ENERGY_LABELS: [&str; 5] = ["Very low", "Low", "Medium", "High", "Very high"];

/// A validated daily check-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Checkin {
    /// Mood rating, 1 (very low) to 5 (great).
    pub mood: u8,
    /// Energy rating, 1 (very low) to 5 (very high).
    pub energy: u8,
    /// Hours slept last night.
    pub sleep_hours: f64,
}

impl Checkin {
    /// Build a check-in, rejecting out-of-range ratings and nonsensical
    /// sleep values.
    pub fn new(mood: u8, energy: u8, sleep_hours: f64) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&mood) {
            return Err(ValidationError::RatingOutOfRange {
                field: "mood",
                value: mood,
            });
        }
        if !(1..=5).contains(&energy) {
            return Err(ValidationError::RatingOutOfRange {
                field: "energy",
                value: energy,
            });
        }
        if !sleep_hours.is_finite() || sleep_hours < 0.0 {
            return Err(ValidationError::InvalidSleepHours(sleep_hours));
        }
        Ok(Self {
            mood,
            energy,
            sleep_hours,
        })
    }

    /// Label for the mood rating.
    pub fn mood_label(&self) -> &'static str {
        MOOD_LABELS[(self.mood - 1) as usize]
    }

    /// Label for the energy rating.
    pub fn energy_label(&self) -> &'static str {
        ENERGY_LABELS[(self.energy - 1) as usize]
    }
}
