//! Error taxonomy shared by the formula engine, schedule generator and sweep driver

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    /// Annuity formula would divide by zero or take an undefined power
    #[error("Domain error in {function}: {reason}")]
    Domain {
        function: &'static str,
        reason: String,
    },

    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid range for {name}: {reason}")]
    InvalidRange { name: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type MortgageResult<T> = Result<T, MortgageError>;

impl MortgageError {
    pub(crate) fn domain(function: &'static str, reason: impl Into<String>) -> Self {
        MortgageError::Domain {
            function,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MortgageError::domain("monthly_payment", "annual rate must be positive");
        assert_eq!(
            err.to_string(),
            "Domain error in monthly_payment: annual rate must be positive"
        );

        let err = MortgageError::invalid("payment_to_income_ratio", "must be in (0, 1)");
        assert_eq!(
            err.to_string(),
            "Invalid input: payment_to_income_ratio: must be in (0, 1)"
        );
    }
}
