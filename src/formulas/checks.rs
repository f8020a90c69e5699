//! Input guards applied at the formula engine boundary

use crate::error::{MortgageError, MortgageResult};

pub(crate) fn finite(field: &str, value: f64) -> MortgageResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MortgageError::invalid(field, format!("must be finite, got {}", value)))
    }
}

pub(crate) fn non_negative(field: &str, value: f64) -> MortgageResult<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(MortgageError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(value)
}

pub(crate) fn positive(field: &str, value: f64) -> MortgageResult<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(MortgageError::invalid(field, format!("must be > 0, got {}", value)));
    }
    Ok(value)
}

/// Open unit interval, used for the payment-to-income ratio
pub(crate) fn unit_open(field: &str, value: f64) -> MortgageResult<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 || value >= 1.0 {
        return Err(MortgageError::invalid(field, format!("must be in (0, 1), got {}", value)));
    }
    Ok(value)
}

/// Down payment as a percent of price, [0, 100)
pub(crate) fn down_payment_percent(value: f64) -> MortgageResult<f64> {
    let value = finite("down_payment_percent", value)?;
    if !(0.0..100.0).contains(&value) {
        return Err(MortgageError::invalid(
            "down_payment_percent",
            format!("must be in [0, 100), got {}", value),
        ));
    }
    Ok(value)
}

/// Computed values must be finite; overflow is reported as a domain error
pub(crate) fn finite_result(function: &'static str, value: f64) -> MortgageResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MortgageError::domain(function, format!("result is not finite ({})", value)))
    }
}

/// Finite and strictly positive computed value
pub(crate) fn positive_result(function: &'static str, value: f64) -> MortgageResult<f64> {
    let value = finite_result(function, value)?;
    if value <= 0.0 {
        return Err(MortgageError::domain(function, format!("result must be > 0, got {}", value)));
    }
    Ok(value)
}

/// Annuity formulas are singular at rate 0 and term 0
pub(crate) fn annuity_domain(
    function: &'static str,
    annual_rate_percent: f64,
    term_months: u32,
) -> MortgageResult<()> {
    if !annual_rate_percent.is_finite() || annual_rate_percent <= 0.0 {
        return Err(MortgageError::domain(
            function,
            format!("annual rate must be a positive percent, got {}", annual_rate_percent),
        ));
    }
    if term_months == 0 {
        return Err(MortgageError::domain(function, "remaining term must be at least one month"));
    }
    Ok(())
}
