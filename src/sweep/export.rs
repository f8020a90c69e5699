//! Delimited text export and import of sweep tables

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use super::row::{SweepRow, SWEEP_HEADER};
use crate::error::MortgageResult;

/// Row-at-a-time sweep table writer
///
/// The header is written on creation, so an empty sweep still produces a
/// valid table.
pub struct SweepWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> SweepWriter<W> {
    pub fn new(writer: W, delimiter: u8) -> MortgageResult<Self> {
        let mut inner = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(writer);
        inner.write_record(SWEEP_HEADER)?;
        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &SweepRow) -> MortgageResult<()> {
        self.inner.serialize(row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> MortgageResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

impl SweepWriter<BufWriter<File>> {
    /// Create (or truncate) a file and write the header
    pub fn create<P: AsRef<Path>>(path: P, delimiter: u8) -> MortgageResult<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), delimiter)
    }
}

/// Write a whole sweep table to any writer
pub fn write_sweep<W: Write>(writer: W, rows: &[SweepRow], delimiter: u8) -> MortgageResult<()> {
    let mut wtr = SweepWriter::new(writer, delimiter)?;
    for row in rows {
        wtr.write_row(row)?;
    }
    wtr.flush()
}

/// Write a whole sweep table to a file
pub fn write_sweep_csv<P: AsRef<Path>>(path: P, rows: &[SweepRow], delimiter: u8) -> MortgageResult<()> {
    let mut wtr = SweepWriter::create(path, delimiter)?;
    for row in rows {
        wtr.write_row(row)?;
    }
    wtr.flush()
}

/// Read a sweep table back from any reader
pub fn read_sweep<R: Read>(reader: R, delimiter: u8) -> MortgageResult<Vec<SweepRow>> {
    let mut rdr = ReaderBuilder::new().delimiter(delimiter).from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let row: SweepRow = result?;
        rows.push(row);
    }

    Ok(rows)
}

/// Read a sweep table from a file
pub fn read_sweep_csv<P: AsRef<Path>>(path: P, delimiter: u8) -> MortgageResult<Vec<SweepRow>> {
    read_sweep(File::open(path)?, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SweepRow> {
        vec![
            SweepRow {
                net_monthly_income: 3_000.0,
                payment_to_income_ratio: 0.3,
                annual_rate_percent: 2.0,
                term_years: 25.0,
                max_price: 265_000.5,
                monthly_payment: 900.0,
                total_interest: 58_000.25,
            },
            SweepRow {
                net_monthly_income: 3_025.0,
                payment_to_income_ratio: 0.3,
                annual_rate_percent: 2.0,
                term_years: 26.0,
                max_price: 275_000.0,
                monthly_payment: 907.5,
                total_interest: 61_000.0,
            },
        ]
    }

    #[test]
    fn test_header_order_and_no_index() {
        let mut buf = Vec::new();
        write_sweep(&mut buf, &sample_rows(), b',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Sueldo_neto_mensual,Relacion_cuota_sueldo,Tasa_interes,Plazo,Precio_piso,Cuota_mensual,Interes_total"
        );
        let first = lines.next().unwrap();
        assert_eq!(first.split(',').count(), 7);
        assert!(first.starts_with("3000.0,0.3,2.0,25.0,"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_custom_delimiter_reads_back() {
        let rows = sample_rows();
        let mut buf = Vec::new();
        write_sweep(&mut buf, &rows, b';').unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("Sueldo_neto_mensual;Relacion_cuota_sueldo;"));

        let loaded = read_sweep(buf.as_slice(), b';').unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_empty_sweep_still_has_header() {
        let mut buf = Vec::new();
        let mut wtr = SweepWriter::new(&mut buf, b',').unwrap();
        wtr.flush().unwrap();
        assert_eq!(wtr.rows_written(), 0);
        drop(wtr);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(read_sweep(text.as_bytes(), b',').unwrap().is_empty());
    }
}
