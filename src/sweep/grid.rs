//! Cartesian product of the four sweep ranges

use serde::{Deserialize, Serialize};

use super::range::SweepRange;
use crate::error::{MortgageError, MortgageResult};

/// Largest number of combinations a grid may hold
pub const MAX_GRID_POINTS: usize = 100_000_000;

/// One combination of sweep inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub net_monthly_income: f64,
    pub payment_to_income_ratio: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
}

impl SweepPoint {
    /// Loan term in whole months
    pub fn term_months(&self) -> u32 {
        (self.term_years * 12.0).round().max(0.0) as u32
    }
}

/// Four independent input ranges, combined in nested order
/// income -> ratio -> rate -> term (term varies fastest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub net_income: SweepRange,
    pub payment_ratio: SweepRange,
    pub annual_rate: SweepRange,
    pub term_years: SweepRange,
}

impl SweepGrid {
    /// Grid with exactly one combination
    pub fn single(
        net_monthly_income: f64,
        payment_to_income_ratio: f64,
        annual_rate_percent: f64,
        term_years: f64,
    ) -> Self {
        Self {
            net_income: SweepRange::single(net_monthly_income),
            payment_ratio: SweepRange::single(payment_to_income_ratio),
            annual_rate: SweepRange::single(annual_rate_percent),
            term_years: SweepRange::single(term_years),
        }
    }

    pub fn validate(&self) -> MortgageResult<()> {
        self.net_income.validate("net_income")?;
        self.payment_ratio.validate("payment_ratio")?;
        self.annual_rate.validate("annual_rate")?;
        self.term_years.validate("term_years")?;

        match self.checked_len() {
            Some(n) if n <= MAX_GRID_POINTS => Ok(()),
            _ => Err(MortgageError::InvalidRange {
                name: "grid".to_string(),
                reason: format!("more than {} combinations", MAX_GRID_POINTS),
            }),
        }
    }

    fn ranges(&self) -> [&SweepRange; 4] {
        [&self.net_income, &self.payment_ratio, &self.annual_rate, &self.term_years]
    }

    /// Number of combinations, `None` on overflow
    pub fn checked_len(&self) -> Option<usize> {
        self.ranges()
            .iter()
            .try_fold(1usize, |acc, range| acc.checked_mul(range.len()))
    }

    /// Total number of combinations, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.ranges()
            .iter()
            .fold(1usize, |acc, range| acc.saturating_mul(range.len()))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination in nested order
    pub fn points(&self) -> impl Iterator<Item = SweepPoint> + '_ {
        self.net_income.values().flat_map(move |income| {
            self.payment_ratio.values().flat_map(move |ratio| {
                self.annual_rate.values().flat_map(move |rate| {
                    self.term_years.values().map(move |years| SweepPoint {
                        net_monthly_income: income,
                        payment_to_income_ratio: ratio,
                        annual_rate_percent: rate,
                        term_years: years,
                    })
                })
            })
        })
    }
}

impl Default for SweepGrid {
    /// Income 900-10000 step 25, ratio 0.28-0.35 step 0.01,
    /// rate 1.0-3.0% step 0.1, term 20-30 years step 1
    fn default() -> Self {
        Self {
            net_income: SweepRange::new(900.0, 10_000.0, 25.0),
            payment_ratio: SweepRange::new(0.28, 0.35, 0.01),
            annual_rate: SweepRange::new(1.0, 3.0, 0.1),
            term_years: SweepRange::new(20.0, 30.0, 1.0),
        }
    }
}
