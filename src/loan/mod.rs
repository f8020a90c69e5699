//! Loan input data

mod params;

pub use params::LoanParameters;
