//! Inclusive numeric ranges described by (min, max, step)

use serde::{Deserialize, Serialize};

use crate::error::{MortgageError, MortgageResult};

/// Slack for floating point stepping so that `max` is kept when
/// `(max - min) / step` lands a hair below an integer
const STEP_TOLERANCE: f64 = 1e-9;

/// Largest number of values a single range may hold
pub const MAX_RANGE_VALUES: usize = 10_000_000;

/// A range of sweep values, endpoints included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SweepRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Range holding exactly one value
    pub fn single(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            step: 1.0,
        }
    }

    /// Check the range is usable; `name` labels the error
    pub fn validate(&self, name: &str) -> MortgageResult<()> {
        let invalid = |reason: String| MortgageError::InvalidRange {
            name: name.to_string(),
            reason,
        };

        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(invalid(format!(
                "bounds and step must be finite (min={}, max={}, step={})",
                self.min, self.max, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(invalid(format!("step must be > 0, got {}", self.step)));
        }
        if self.min > self.max {
            return Err(invalid(format!("min {} exceeds max {}", self.min, self.max)));
        }
        let count = self.count();
        if !count.is_finite() || count > MAX_RANGE_VALUES as f64 {
            return Err(invalid(format!(
                "holds {} values, limit is {}",
                count, MAX_RANGE_VALUES
            )));
        }
        Ok(())
    }

    /// Number of values as a float, unbounded
    fn count(&self) -> f64 {
        ((self.max - self.min) / self.step + STEP_TOLERANCE).floor() + 1.0
    }

    /// Number of values in the range, 0 if the range is invalid
    pub fn len(&self) -> usize {
        if self.validate("range").is_err() {
            return 0;
        }
        self.count() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at position `i`, computed from `min` to avoid accumulated drift
    pub fn value_at(&self, i: usize) -> f64 {
        self.min + i as f64 * self.step
    }

    /// Iterate the values from `min` up to `max`
    pub fn values(&self) -> impl Iterator<Item = f64> + Clone + '_ {
        (0..self.len()).map(move |i| self.value_at(i))
    }
}
