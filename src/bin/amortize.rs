//! Print the amortization schedule of a single loan
//!
//! Optionally writes the full month-by-month table to a delimited file.

use anyhow::Context;
use clap::Parser;
use mortgage_sweep::schedule::{write_schedule_csv, AmortizationSchedule};
use mortgage_sweep::sweep::delimiter_byte;
use mortgage_sweep::LoanParameters;

#[derive(Parser, Debug)]
#[command(name = "amortize", version, about = "Fixed-rate mortgage amortization schedule")]
struct Args {
    /// Total property price
    #[arg(long)]
    price: f64,

    /// Annual interest rate in percent (2.0 = 2%)
    #[arg(long)]
    rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 25)]
    years: u32,

    /// Down payment in percent of price
    #[arg(long, default_value_t = 20.0)]
    down_payment: f64,

    /// Write the full schedule to this file
    #[arg(long)]
    output: Option<String>,

    /// Field delimiter for --output
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Rows to print to the console
    #[arg(long, default_value_t = 12)]
    show: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loan = LoanParameters::with_term_years(args.price, args.down_payment, args.rate, args.years)
        .context("Invalid loan parameters")?;
    let schedule = AmortizationSchedule::build(&loan)?;

    println!("Loan:");
    println!("  Price: {:.2}", loan.property_price());
    println!("  Down payment: {:.2} ({:.1}%)", loan.down_payment_amount(), loan.down_payment_percent());
    println!("  Financed: {:.2}", loan.financed_principal());
    println!("  Rate: {:.2}%  Term: {} months", loan.annual_rate_percent(), loan.term_months());
    println!();

    println!("{:>5} {:>9} {:>14} {:>12} {:>12} {:>12}",
        "Month", "Remaining", "Pending", "Payment", "Amortized", "Interest");
    println!("{}", "-".repeat(70));

    for row in schedule.iter().take(args.show) {
        println!("{:>5} {:>9} {:>14.2} {:>12.2} {:>12.2} {:>12.2}",
            row.month,
            row.remaining_term_months,
            row.pending_principal,
            row.payment,
            row.amortization,
            row.interest,
        );
    }

    if schedule.len() > args.show {
        println!("... ({} more months)", schedule.len() - args.show);
    }

    if let Some(path) = &args.output {
        write_schedule_csv(path, &schedule, delimiter_byte(args.delimiter)?)
            .with_context(|| format!("Unable to write {}", path))?;
        println!("\nFull schedule written to: {}", path);
    }

    let summary = schedule.summary();
    println!("\nSummary:");
    println!("  Months: {}", summary.total_months);
    println!("  Monthly payment: {:.2}", summary.monthly_payment);
    println!("  Total paid: {:.2}", summary.total_paid);
    println!("  Total interest: {:.2}", summary.total_interest);
    println!("  Final balance: {:.6}", summary.final_balance);

    Ok(())
}
