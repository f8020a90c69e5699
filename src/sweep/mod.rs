//! Affordability sweep over a grid of income, ratio, rate and term

mod config;
mod export;
mod grid;
mod range;
mod row;
mod runner;

pub use config::{
    delimiter_byte, InvalidPointPolicy, SweepConfig, DEFAULT_DOWN_PAYMENT_PERCENT,
    DEFAULT_OUTPUT_PATH,
};
pub use export::{read_sweep, read_sweep_csv, write_sweep, write_sweep_csv, SweepWriter};
pub use grid::{SweepGrid, SweepPoint, MAX_GRID_POINTS};
pub use range::{SweepRange, MAX_RANGE_VALUES};
pub use row::{SkippedPoint, SweepReport, SweepRow, SWEEP_HEADER};
pub use runner::SweepRunner;
