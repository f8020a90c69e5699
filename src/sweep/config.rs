//! Sweep run configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::grid::SweepGrid;
use crate::error::{MortgageError, MortgageResult};
use crate::formulas::checks;

/// Default down payment brought by the buyer (percent of price)
pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 20.0;

/// Default output file of the main sweep
pub const DEFAULT_OUTPUT_PATH: &str = "Resumen_pago_hipotecas.csv";

/// What to do when a grid point cannot be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPointPolicy {
    /// Fail the whole run on the first invalid point
    #[default]
    Abort,
    /// Log a warning, record the point and keep going
    SkipAndLog,
}

/// Configuration for a sweep run
///
/// Every field has a default, so a JSON file only needs the overrides:
/// ```json
/// { "grid": { "net_income": { "min": 1500, "max": 4000, "step": 100 },
///             "payment_ratio": { "min": 0.3, "max": 0.3, "step": 1 },
///             "annual_rate": { "min": 2.0, "max": 2.0, "step": 1 },
///             "term_years": { "min": 25, "max": 30, "step": 5 } },
///   "parallel": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub grid: SweepGrid,

    /// Down payment percent applied to every grid point
    pub down_payment_percent: f64,

    pub on_invalid: InvalidPointPolicy,

    /// Evaluate grid points on the rayon thread pool
    pub parallel: bool,

    /// Field delimiter of the exported table
    pub delimiter: char,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: SweepGrid::default(),
            down_payment_percent: DEFAULT_DOWN_PAYMENT_PERCENT,
            on_invalid: InvalidPointPolicy::Abort,
            parallel: false,
            delimiter: ',',
        }
    }
}

impl SweepConfig {
    /// Sweep over the given grid with default settings
    pub fn with_grid(grid: SweepGrid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> MortgageResult<Self> {
        let config: SweepConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> MortgageResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> MortgageResult<()> {
        self.grid.validate()?;
        checks::down_payment_percent(self.down_payment_percent)?;
        self.delimiter_byte()?;
        Ok(())
    }

    /// Delimiter as the single byte the CSV writer expects
    pub fn delimiter_byte(&self) -> MortgageResult<u8> {
        delimiter_byte(self.delimiter)
    }
}

/// Convert a delimiter character to a byte; only ASCII is accepted
pub fn delimiter_byte(delimiter: char) -> MortgageResult<u8> {
    if delimiter.is_ascii() && delimiter != '\n' && delimiter != '\r' && delimiter != '"' {
        Ok(delimiter as u8)
    } else {
        Err(MortgageError::invalid(
            "delimiter",
            format!("must be a single ASCII character other than quote or newline, got {:?}", delimiter),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepRange;

    #[test]
    fn test_defaults() {
        let config = SweepConfig::default();
        assert_eq!(config.down_payment_percent, 20.0);
        assert_eq!(config.on_invalid, InvalidPointPolicy::Abort);
        assert_eq!(config.delimiter_byte().unwrap(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SweepConfig::from_json_str(
            r#"{ "grid": { "net_income": { "min": 1500, "max": 4000, "step": 100 },
                           "payment_ratio": { "min": 0.3, "max": 0.3, "step": 1 },
                           "annual_rate": { "min": 2.0, "max": 2.0, "step": 1 },
                           "term_years": { "min": 25, "max": 30, "step": 5 } },
                 "on_invalid": "skip_and_log",
                 "delimiter": ";" }"#,
        )
        .unwrap();

        assert_eq!(config.grid.net_income, SweepRange::new(1500.0, 4000.0, 100.0));
        assert_eq!(config.grid.len(), 26 * 2);
        assert_eq!(config.on_invalid, InvalidPointPolicy::SkipAndLog);
        assert_eq!(config.delimiter_byte().unwrap(), b';');
        assert_eq!(config.down_payment_percent, DEFAULT_DOWN_PAYMENT_PERCENT);
        assert!(!config.parallel);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            SweepConfig::from_json_str("{ \"down_payment_percent\": 120 }"),
            Err(MortgageError::InvalidInput { .. })
        ));
        assert!(matches!(
            SweepConfig::from_json_str("{ \"parallel\": \"yes\" }"),
            Err(MortgageError::Config(_))
        ));
        assert!(delimiter_byte('€').is_err());
        assert!(delimiter_byte('\t').is_ok());
    }
}
