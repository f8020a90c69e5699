//! Write an amortization table as delimited text

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use super::rows::AmortizationSchedule;
use crate::error::MortgageResult;

/// Write every row of `schedule` with a header line to any writer
pub fn write_schedule<W: Write>(
    writer: W,
    schedule: &AmortizationSchedule,
    delimiter: u8,
) -> MortgageResult<()> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    for row in schedule {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `schedule` to a file, replacing it if present
pub fn write_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &AmortizationSchedule,
    delimiter: u8,
) -> MortgageResult<()> {
    let file = std::fs::File::create(path)?;
    write_schedule(std::io::BufWriter::new(file), schedule, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;

    #[test]
    fn test_schedule_csv_layout() {
        let schedule = build_schedule(120_000.0, 20.0, 2.0, 12).unwrap();
        let mut buf = Vec::new();
        write_schedule(&mut buf, &schedule, b';').unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Mes;Plazo_restante;Capital_pendiente;Cuota_mensual;Amortizacion_mensual;Intereses_mensuales"
        );
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("1;12;96000"));
        assert!(lines[12].starts_with("12;1;"));
    }
}
