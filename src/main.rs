//! Mortgage Sweep CLI
//!
//! Runs the full affordability sweep and writes the summary table.
//! Accepts overrides via environment variables:
//!   SWEEP_CONFIG (JSON config file), SWEEP_OUTPUT, CSV_SEPARATOR, SWEEP_PARALLEL

use anyhow::{bail, Context};
use mortgage_sweep::sweep::{
    delimiter_byte, write_sweep_csv, SweepConfig, SweepRunner, DEFAULT_OUTPUT_PATH,
};
use std::env;
use std::time::Instant;

fn load_config() -> anyhow::Result<SweepConfig> {
    let mut config = match env::var("SWEEP_CONFIG") {
        Ok(path) => SweepConfig::from_json_path(&path)
            .with_context(|| format!("Failed to load sweep config from {}", path))?,
        Err(_) => SweepConfig {
            parallel: true,
            ..SweepConfig::default()
        },
    };

    if let Ok(sep) = env::var("CSV_SEPARATOR") {
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                delimiter_byte(c)?;
                config.delimiter = c;
            }
            _ => bail!("CSV_SEPARATOR must be a single character, got {:?}", sep),
        }
    }

    if let Ok(flag) = env::var("SWEEP_PARALLEL") {
        config.parallel = matches!(flag.as_str(), "1" | "true" | "yes");
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Mortgage Sweep v0.1.0");
    println!("=====================\n");

    let config = load_config()?;
    let output_path = env::var("SWEEP_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());
    let grid = &config.grid;

    println!("Grid:");
    println!("  Net income:   {:>8.2} - {:>8.2} step {}", grid.net_income.min, grid.net_income.max, grid.net_income.step);
    println!("  Ratio:        {:>8.2} - {:>8.2} step {}", grid.payment_ratio.min, grid.payment_ratio.max, grid.payment_ratio.step);
    println!("  Rate (%):     {:>8.2} - {:>8.2} step {}", grid.annual_rate.min, grid.annual_rate.max, grid.annual_rate.step);
    println!("  Term (years): {:>8.0} - {:>8.0} step {}", grid.term_years.min, grid.term_years.max, grid.term_years.step);
    println!("  Down payment: {:.1}%", config.down_payment_percent);
    println!("  Combinations: {}", grid.len());
    println!();

    let start = Instant::now();
    let delimiter = config.delimiter_byte()?;
    let runner = SweepRunner::new(config);
    let report = runner.run().context("Sweep failed")?;
    println!("Sweep complete in {:?}", start.elapsed());

    write_sweep_csv(&output_path, &report.rows, delimiter)
        .with_context(|| format!("Unable to write {}", output_path))?;
    println!("Wrote {} rows to: {}", report.rows.len(), output_path);

    if !report.skipped.is_empty() {
        println!("Skipped {} invalid combinations (see log)", report.skipped.len());
    }

    if let Some(best) = report.most_affordable() {
        println!("\nHighest affordable price:");
        println!("  Income: {:.2}  Ratio: {:.2}  Rate: {:.1}%  Term: {} years",
            best.net_monthly_income,
            best.payment_to_income_ratio,
            best.annual_rate_percent,
            best.term_years,
        );
        println!("  Price: {:.2}  Payment: {:.2}  Total interest: {:.2}",
            best.max_price, best.monthly_payment, best.total_interest);
    }

    Ok(())
}
