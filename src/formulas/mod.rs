//! Stateless closed-form mortgage formulas

mod annuity;
pub(crate) mod checks;

pub use annuity::{amortization, max_affordable_price, monthly_interest, monthly_payment};
pub(crate) use annuity::interest_on;
