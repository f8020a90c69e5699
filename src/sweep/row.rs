//! Sweep output records

use serde::{Deserialize, Serialize};

use super::grid::SweepPoint;
use crate::error::MortgageError;

/// Column names of the exported sweep table, in order
pub const SWEEP_HEADER: [&str; 7] = [
    "Sueldo_neto_mensual",
    "Relacion_cuota_sueldo",
    "Tasa_interes",
    "Plazo",
    "Precio_piso",
    "Cuota_mensual",
    "Interes_total",
];

/// Summary of one grid combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    #[serde(rename = "Sueldo_neto_mensual")]
    pub net_monthly_income: f64,

    #[serde(rename = "Relacion_cuota_sueldo")]
    pub payment_to_income_ratio: f64,

    #[serde(rename = "Tasa_interes")]
    pub annual_rate_percent: f64,

    /// Term in years
    #[serde(rename = "Plazo")]
    pub term_years: f64,

    /// Maximum affordable property price
    #[serde(rename = "Precio_piso")]
    pub max_price: f64,

    /// First (and constant) monthly payment
    #[serde(rename = "Cuota_mensual")]
    pub monthly_payment: f64,

    /// Interest paid over the whole loan
    #[serde(rename = "Interes_total")]
    pub total_interest: f64,
}

/// A grid point that could not be evaluated
#[derive(Debug)]
pub struct SkippedPoint {
    pub point: SweepPoint,
    pub error: MortgageError,
}

/// Result of a collected sweep run
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Rows in grid order
    pub rows: Vec<SweepRow>,

    /// Points skipped under the skip-and-log policy
    pub skipped: Vec<SkippedPoint>,
}

impl SweepReport {
    /// Number of points visited, evaluated or skipped
    pub fn points_visited(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }

    /// Row with the highest affordable price
    pub fn most_affordable(&self) -> Option<&SweepRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.max_price.total_cmp(&b.max_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64) -> SweepRow {
        SweepRow {
            net_monthly_income: 1_000.0,
            payment_to_income_ratio: 0.3,
            annual_rate_percent: 2.0,
            term_years: 25.0,
            max_price: price,
            monthly_payment: 300.0,
            total_interest: 10_000.0,
        }
    }

    #[test]
    fn test_report_helpers() {
        let report = SweepReport {
            rows: vec![row(90_000.0), row(120_000.0), row(100_000.0)],
            skipped: Vec::new(),
        };
        assert_eq!(report.points_visited(), 3);
        assert_eq!(report.most_affordable().unwrap().max_price, 120_000.0);
        assert!(SweepReport::default().most_affordable().is_none());
    }
}
