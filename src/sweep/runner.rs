//! Sweep runner: evaluates every grid point against the formula engine
//! and the schedule generator.

use std::io::Write;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use super::config::{InvalidPointPolicy, SweepConfig};
use super::export::SweepWriter;
use super::grid::SweepPoint;
use super::row::{SkippedPoint, SweepReport, SweepRow};
use crate::error::{MortgageError, MortgageResult};
use crate::formulas::max_affordable_price;
use crate::schedule::build_schedule;

/// Runs an affordability sweep
///
/// # Example
/// ```
/// use mortgage_sweep::sweep::{SweepConfig, SweepGrid, SweepRunner};
///
/// let runner = SweepRunner::new(SweepConfig::with_grid(SweepGrid::single(3000.0, 0.30, 2.0, 25.0)));
/// let report = runner.run().unwrap();
/// assert_eq!(report.rows.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SweepRunner {
    config: SweepConfig,
}

impl SweepRunner {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Evaluate one grid point: affordable price, then that price's schedule
    pub fn evaluate(&self, point: &SweepPoint) -> MortgageResult<SweepRow> {
        let term_months = point.term_months();
        let down_payment = self.config.down_payment_percent;

        let max_price = max_affordable_price(
            point.net_monthly_income,
            point.payment_to_income_ratio,
            down_payment,
            point.annual_rate_percent,
            term_months,
        )?;
        let schedule = build_schedule(max_price, down_payment, point.annual_rate_percent, term_months)?;

        Ok(SweepRow {
            net_monthly_income: point.net_monthly_income,
            payment_to_income_ratio: point.payment_to_income_ratio,
            annual_rate_percent: point.annual_rate_percent,
            term_years: point.term_years,
            max_price,
            monthly_payment: schedule.first_payment(),
            total_interest: schedule.total_interest(),
        })
    }

    /// Evaluate the whole grid and collect the rows in grid order
    pub fn run(&self) -> MortgageResult<SweepReport> {
        self.config.validate()?;
        let grid = &self.config.grid;
        info!(
            "Running sweep over {} points (parallel={}, on_invalid={:?})",
            grid.len(),
            self.config.parallel,
            self.config.on_invalid
        );
        let start = Instant::now();

        let points: Vec<SweepPoint> = grid.points().collect();
        let outcomes: Vec<(SweepPoint, MortgageResult<SweepRow>)> = if self.config.parallel {
            points.into_par_iter().map(|p| (p, self.evaluate(&p))).collect()
        } else {
            points.into_iter().map(|p| (p, self.evaluate(&p))).collect()
        };

        let mut report = SweepReport::default();
        for (point, outcome) in outcomes {
            match outcome {
                Ok(row) => report.rows.push(row),
                Err(error) => self.handle_invalid(point, error, &mut report.skipped)?,
            }
        }

        info!(
            "Sweep complete: {} rows, {} skipped in {:?}",
            report.rows.len(),
            report.skipped.len(),
            start.elapsed()
        );
        Ok(report)
    }

    /// Evaluate the grid sequentially, writing each row as soon as it is ready.
    ///
    /// Only one schedule is alive at a time. Returns the number of skipped
    /// points.
    pub fn stream_to<W: Write>(&self, writer: &mut SweepWriter<W>) -> MortgageResult<usize> {
        self.config.validate()?;
        info!("Streaming sweep over {} points", self.config.grid.len());

        let mut skipped = Vec::new();
        for point in self.config.grid.points() {
            match self.evaluate(&point) {
                Ok(row) => writer.write_row(&row)?,
                Err(error) => self.handle_invalid(point, error, &mut skipped)?,
            }
        }
        writer.flush()?;

        info!(
            "Streamed {} rows, {} skipped",
            writer.rows_written(),
            skipped.len()
        );
        Ok(skipped.len())
    }

    fn handle_invalid(
        &self,
        point: SweepPoint,
        error: MortgageError,
        skipped: &mut Vec<SkippedPoint>,
    ) -> MortgageResult<()> {
        match self.config.on_invalid {
            InvalidPointPolicy::Abort => {
                debug!("Aborting sweep at {:?}", point);
                Err(error)
            }
            InvalidPointPolicy::SkipAndLog => {
                warn!("Skipping sweep point {:?}: {}", point, error);
                skipped.push(SkippedPoint { point, error });
                Ok(())
            }
        }
    }
}

impl Default for SweepRunner {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}
