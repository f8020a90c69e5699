//! Amortization schedule generation for a single loan

mod builder;
mod export;
mod rows;

pub use builder::build_schedule;
pub use export::{write_schedule, write_schedule_csv};
pub use rows::{total_interest, AmortizationSchedule, ScheduleRow, ScheduleSummary};
