//! Amortization table structures

use serde::{Deserialize, Serialize};

use crate::loan::LoanParameters;

/// One month of an amortization table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month number (1-indexed)
    #[serde(rename = "Mes")]
    pub month: u32,

    /// Months left including this one (term down to 1)
    #[serde(rename = "Plazo_restante")]
    pub remaining_term_months: u32,

    /// Balance owed at the start of the month
    #[serde(rename = "Capital_pendiente")]
    pub pending_principal: f64,

    #[serde(rename = "Cuota_mensual")]
    pub payment: f64,

    #[serde(rename = "Amortizacion_mensual")]
    pub amortization: f64,

    #[serde(rename = "Intereses_mensuales")]
    pub interest: f64,
}

impl ScheduleRow {
    /// Balance owed after this month's amortization
    pub fn closing_balance(&self) -> f64 {
        self.pending_principal - self.amortization
    }
}

/// Full month-by-month table for one loan, immutable once built
#[derive(Debug, Clone, Serialize)]
pub struct AmortizationSchedule {
    params: LoanParameters,
    rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    pub(crate) fn from_rows(params: LoanParameters, rows: Vec<ScheduleRow>) -> Self {
        Self { params, rows }
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }

    /// Payment of the first month (the same for every month)
    pub fn first_payment(&self) -> f64 {
        self.rows.first().map(|r| r.payment).unwrap_or(0.0)
    }

    /// Total interest paid to the bank over the life of the loan
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    pub fn total_amortization(&self) -> f64 {
        self.rows.iter().map(|r| r.amortization).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }

    /// Balance left after the last payment, ~0 for a fully repaid loan
    pub fn final_balance(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.closing_balance())
            .unwrap_or_else(|| self.params.financed_principal())
    }

    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            total_months: self.rows.len() as u32,
            financed_principal: self.params.financed_principal(),
            monthly_payment: self.first_payment(),
            total_paid: self.total_paid(),
            total_interest: self.total_interest(),
            total_amortization: self.total_amortization(),
            final_balance: self.final_balance(),
        }
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Sum of monthly interest over every row of a schedule
pub fn total_interest(schedule: &AmortizationSchedule) -> f64 {
    schedule.total_interest()
}

/// Totals for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub financed_principal: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_amortization: f64,
    pub final_balance: f64,
}
