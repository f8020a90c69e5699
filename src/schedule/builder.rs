//! Month-by-month amortization of a fixed-payment loan

use log::debug;

use super::rows::{AmortizationSchedule, ScheduleRow};
use crate::error::MortgageResult;
use crate::formulas::{amortization, interest_on, monthly_payment};
use crate::loan::LoanParameters;

impl AmortizationSchedule {
    /// Build the full table for validated loan parameters.
    ///
    /// The payment is fixed from the full term up front. Each following row is
    /// produced from the previous row's closing balance, so there is exactly
    /// one row per month of the term.
    pub fn build(params: &LoanParameters) -> MortgageResult<Self> {
        let principal = params.financed_principal();
        let rate = params.annual_rate_percent();
        let term = params.term_months();

        let payment = monthly_payment(principal, rate, term)?;

        let rows: Vec<ScheduleRow> = (1..=term)
            .rev()
            .scan(principal, |pending, remaining| {
                let interest = interest_on(*pending, rate);
                let row = ScheduleRow {
                    month: term - remaining + 1,
                    remaining_term_months: remaining,
                    pending_principal: *pending,
                    payment,
                    amortization: amortization(payment, interest),
                    interest,
                };
                *pending = row.closing_balance();
                Some(row)
            })
            .collect();

        let schedule = AmortizationSchedule::from_rows(*params, rows);
        debug!(
            "Built {}-month schedule: principal={:.2} payment={:.2} final_balance={:.3e}",
            term,
            principal,
            payment,
            schedule.final_balance()
        );

        Ok(schedule)
    }
}

/// Validate the inputs and build the amortization table for one loan
pub fn build_schedule(
    property_price: f64,
    down_payment_percent: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> MortgageResult<AmortizationSchedule> {
    let params = LoanParameters::new(
        property_price,
        down_payment_percent,
        annual_rate_percent,
        term_months,
    )?;
    AmortizationSchedule::build(&params)
}
