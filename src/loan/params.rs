//! Validated input record for a single fixed-rate loan

use serde::Serialize;

use crate::error::{MortgageError, MortgageResult};
use crate::formulas::checks;

/// A fixed-rate, fixed-payment mortgage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    /// Total property price
    property_price: f64,

    /// Down payment as a percent of price (20.0 = 20%)
    down_payment_percent: f64,

    /// Annual interest rate in percent
    annual_rate_percent: f64,

    /// Loan term in months
    term_months: u32,
}

impl LoanParameters {
    /// Validate and build loan parameters.
    ///
    /// Rejects non-positive price, a down payment outside [0, 100), a
    /// non-positive rate and a zero term.
    pub fn new(
        property_price: f64,
        down_payment_percent: f64,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> MortgageResult<Self> {
        let property_price = checks::positive("property_price", property_price)?;
        let down_payment_percent = checks::down_payment_percent(down_payment_percent)?;
        checks::annuity_domain("LoanParameters::new", annual_rate_percent, term_months)?;

        let params = Self {
            property_price,
            down_payment_percent,
            annual_rate_percent,
            term_months,
        };

        // Tiny prices can underflow to zero after the down payment
        if params.financed_principal() <= 0.0 {
            return Err(MortgageError::invalid(
                "property_price",
                "financed principal must be positive",
            ));
        }

        Ok(params)
    }

    /// Same as [`LoanParameters::new`] with the term given in whole years
    pub fn with_term_years(
        property_price: f64,
        down_payment_percent: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> MortgageResult<Self> {
        Self::new(property_price, down_payment_percent, annual_rate_percent, term_years * 12)
    }

    pub fn property_price(&self) -> f64 {
        self.property_price
    }

    pub fn down_payment_percent(&self) -> f64 {
        self.down_payment_percent
    }

    /// Down payment as a fraction in [0, 1)
    pub fn down_payment_fraction(&self) -> f64 {
        self.down_payment_percent / 100.0
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    /// Amount borrowed: price net of the down payment
    pub fn financed_principal(&self) -> f64 {
        self.property_price * (1.0 - self.down_payment_fraction())
    }

    /// Cash the buyer brings upfront
    pub fn down_payment_amount(&self) -> f64 {
        self.property_price * self.down_payment_fraction()
    }
}
