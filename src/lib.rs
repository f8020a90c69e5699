//! Mortgage Sweep - fixed-rate mortgage amortization and affordability tables
//!
//! This library provides:
//! - Closed-form annuity formulas (monthly interest, payment, amortization, max price)
//! - Month-by-month amortization schedules for a single loan
//! - Parameter sweeps over income, payment ratio, rate and term with CSV export

pub mod error;
pub mod formulas;
pub mod loan;
pub mod schedule;
pub mod sweep;

// Re-export commonly used types
pub use error::{MortgageError, MortgageResult};
pub use formulas::{amortization, max_affordable_price, monthly_interest, monthly_payment};
pub use loan::LoanParameters;
pub use schedule::{build_schedule, total_interest, AmortizationSchedule, ScheduleRow};
pub use sweep::{SweepConfig, SweepGrid, SweepRange, SweepReport, SweepRow, SweepRunner};
