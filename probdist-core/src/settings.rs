//! Runtime settings shared by distribution operations

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// Default tolerance when comparing success probabilities
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Settings passed to operations that need a tunable threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum absolute difference at which two probabilities count as equal
    pub probability_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_probability_tolerance(mut self, tolerance: f64) -> Self {
        self.probability_tolerance = tolerance;
        self
    }

    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| StatsError::domain(format!("invalid settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.probability_tolerance.is_finite() || self.probability_tolerance < 0.0 {
            return Err(StatsError::domain(format!(
                "probability tolerance must be finite and non-negative, got {}",
                self.probability_tolerance
            )));
        }
        Ok(())
    }

    /// Whether `a` and `b` are equal within the probability tolerance
    pub fn probabilities_match(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.probability_tolerance
    }
}
