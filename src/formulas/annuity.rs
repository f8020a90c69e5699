//! Closed-form fixed-rate mortgage formulas
//!
//! Rates are annual percents (2.4 means 2.4%), terms are months. The monthly
//! periodic rate is `annual_rate_percent / 1200`.

use super::checks;
use crate::error::MortgageResult;

/// Months per year times 100 (percent to fraction)
const PERCENT_MONTHS: f64 = 12.0 * 100.0;

/// Monthly periodic rate as a fraction
#[inline]
pub(crate) fn periodic_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / PERCENT_MONTHS
}

#[inline]
pub(crate) fn interest_on(pending_principal: f64, annual_rate_percent: f64) -> f64 {
    pending_principal * annual_rate_percent / PERCENT_MONTHS
}

/// `1 - (1 + i)^-n`, evaluated through `ln_1p`/`exp_m1` so tiny periodic
/// rates do not cancel to zero
#[inline]
fn discount_complement(annual_rate_percent: f64, term_months: u32) -> f64 {
    let i = periodic_rate(annual_rate_percent);
    -(-(term_months as f64) * i.ln_1p()).exp_m1()
}

/// Payment per unit of principal: `i / (1 - (1 + i)^-n)`
///
/// Callers must have checked the annuity domain (rate > 0, term > 0).
#[inline]
pub(crate) fn annuity_factor(annual_rate_percent: f64, term_months: u32) -> f64 {
    periodic_rate(annual_rate_percent) / discount_complement(annual_rate_percent, term_months)
}

/// Interest accrued in one month on the outstanding balance.
///
/// Independent of the remaining term.
pub fn monthly_interest(pending_principal: f64, annual_rate_percent: f64) -> MortgageResult<f64> {
    let pending = checks::non_negative("pending_principal", pending_principal)?;
    let rate = checks::non_negative("annual_rate_percent", annual_rate_percent)?;
    checks::finite_result("monthly_interest", interest_on(pending, rate))
}

/// Constant monthly payment that repays `pending_principal` over
/// `remaining_term_months`.
///
/// # Errors
/// Domain error when the rate is not positive, the term is zero, or the
/// payment is not a finite number.
pub fn monthly_payment(
    pending_principal: f64,
    annual_rate_percent: f64,
    remaining_term_months: u32,
) -> MortgageResult<f64> {
    checks::annuity_domain("monthly_payment", annual_rate_percent, remaining_term_months)?;
    let interest = monthly_interest(pending_principal, annual_rate_percent)?;
    let denominator = checks::positive_result(
        "monthly_payment",
        discount_complement(annual_rate_percent, remaining_term_months),
    )?;
    checks::finite_result("monthly_payment", interest / denominator)
}

/// Portion of a payment that reduces principal
pub fn amortization(payment: f64, interest: f64) -> f64 {
    payment - interest
}

/// Highest property price whose financed part can be serviced with
/// `net_monthly_income * payment_to_income_ratio` per month.
///
/// Inverts the annuity formula to get the financeable principal, then grosses
/// it up by the down payment.
pub fn max_affordable_price(
    net_monthly_income: f64,
    payment_to_income_ratio: f64,
    down_payment_percent: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> MortgageResult<f64> {
    checks::annuity_domain("max_affordable_price", annual_rate_percent, term_months)?;
    let income = checks::positive("net_monthly_income", net_monthly_income)?;
    let ratio = checks::unit_open("payment_to_income_ratio", payment_to_income_ratio)?;
    let down_payment = checks::down_payment_percent(down_payment_percent)?;

    let target_payment = income * ratio;
    let factor = checks::positive_result(
        "max_affordable_price",
        annuity_factor(annual_rate_percent, term_months),
    )?;
    let financeable_principal = target_payment / factor;

    checks::positive_result(
        "max_affordable_price",
        financeable_principal / (1.0 - down_payment / 100.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_interest_example() {
        assert_eq!(monthly_interest(100_000.0, 2.4).unwrap(), 200.0);
    }

    #[test]
    fn test_monthly_interest_rejects_negative_principal() {
        assert!(matches!(
            monthly_interest(-1.0, 2.0),
            Err(MortgageError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_monthly_payment_known_value() {
        // 200k at 6% over 30 years: the textbook 1199.10
        let payment = monthly_payment(200_000.0, 6.0, 360).unwrap();
        assert!((payment - 1199.10).abs() < 0.01, "got {}", payment);
    }

    #[test]
    fn test_single_month_payment_repays_everything() {
        let payment = monthly_payment(1_000.0, 3.0, 1).unwrap();
        assert_relative_eq!(payment, 1_000.0 * (1.0 + 0.03 / 12.0), max_relative = 1e-12);
    }

    #[test]
    fn test_monthly_payment_rejects_zero_rate_and_term() {
        assert!(matches!(
            monthly_payment(100_000.0, 0.0, 240),
            Err(MortgageError::Domain { function: "monthly_payment", .. })
        ));
        assert!(matches!(
            monthly_payment(100_000.0, 2.0, 0),
            Err(MortgageError::Domain { .. })
        ));
        assert!(monthly_payment(100_000.0, -1.0, 240).is_err());
    }

    #[test]
    fn test_amortization_positive_for_valid_inputs() {
        for &principal in &[1_000.0, 150_000.0, 2_500_000.0] {
            for &rate in &[0.1, 1.0, 2.4, 7.5, 15.0] {
                for &term in &[1u32, 12, 240, 360, 480] {
                    let payment = monthly_payment(principal, rate, term).unwrap();
                    let interest = monthly_interest(principal, rate).unwrap();
                    assert!(
                        amortization(payment, interest) > 0.0,
                        "principal={} rate={} term={}",
                        principal,
                        rate,
                        term
                    );
                }
            }
        }
    }

    #[test]
    fn test_max_price_inverts_payment() {
        let price = max_affordable_price(3_000.0, 0.30, 20.0, 2.0, 300).unwrap();
        let financed = price * (1.0 - 0.20);
        let payment = monthly_payment(financed, 2.0, 300).unwrap();
        assert_relative_eq!(payment, 900.0, max_relative = 1e-10);
    }

    #[test]
    fn test_max_price_without_down_payment_is_financed_principal() {
        let with_none = max_affordable_price(2_000.0, 0.25, 0.0, 3.0, 240).unwrap();
        let with_half = max_affordable_price(2_000.0, 0.25, 50.0, 3.0, 240).unwrap();
        assert_relative_eq!(with_half, 2.0 * with_none, max_relative = 1e-12);
    }

    #[test]
    fn test_max_price_rejects_invalid_inputs() {
        assert!(matches!(
            max_affordable_price(3_000.0, 0.3, 20.0, 0.0, 300),
            Err(MortgageError::Domain { .. })
        ));
        assert!(max_affordable_price(-3_000.0, 0.3, 20.0, 2.0, 300).is_err());
        assert!(max_affordable_price(3_000.0, 1.2, 20.0, 2.0, 300).is_err());
        assert!(max_affordable_price(3_000.0, 0.3, 100.0, 2.0, 300).is_err());
        assert!(max_affordable_price(3_000.0, 0.3, 20.0, 2.0, 0).is_err());
    }

    #[test]
    fn test_tiny_rate_stays_finite() {
        // (1 + i)^-n rounds to exactly 1.0 at this rate
        let payment = monthly_payment(100_000.0, 1e-14, 240).unwrap();
        assert_relative_eq!(payment, 100_000.0 / 240.0, max_relative = 1e-9);

        let price = max_affordable_price(3_000.0, 0.3, 20.0, 1e-14, 240).unwrap();
        assert!(price.is_finite() && price > 0.0);
        assert_relative_eq!(price, 900.0 * 240.0 / 0.8, max_relative = 1e-9);

        let payment = monthly_payment(100_000.0, 1e-9, 240).unwrap();
        assert_relative_eq!(payment, 416.666_666_7, max_relative = 1e-9);
    }

    #[test]
    fn test_overflowing_results_are_rejected() {
        assert!(matches!(
            monthly_payment(f64::MAX, 15.0, 12),
            Err(MortgageError::Domain { .. })
        ));
        assert!(matches!(
            monthly_interest(f64::MAX, 15.0),
            Err(MortgageError::Domain { .. })
        ));
        assert!(matches!(
            max_affordable_price(f64::MAX, 0.9, 90.0, 50.0, 1),
            Err(MortgageError::Domain { .. })
        ));
    }

    #[test]
    fn test_very_long_terms_do_not_wrap() {
        // Tends to a perpetuity: payment equals interest
        let payment = monthly_payment(120_000.0, 3.0, u32::MAX).unwrap();
        assert_relative_eq!(payment, 300.0, max_relative = 1e-12);

        let price = max_affordable_price(1_000.0, 0.3, 0.0, 3.0, u32::MAX).unwrap();
        assert_relative_eq!(price, 120_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_annuity_factor_matches_payment() {
        let factor = annuity_factor(2.5, 360);
        let payment = monthly_payment(1.0, 2.5, 360).unwrap();
        assert_relative_eq!(factor, payment, max_relative = 1e-12);
    }
}
