//! CSV output for synthetic readings.

use anyhow::Result;
use ontosim_telemetry::Reading;
use std::io::Write;

pub const CSV_HEADER: &str = "timestamp,component,sensor,value";

pub struct CsvRecorder<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> CsvRecorder<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{CSV_HEADER}")?;
        Ok(Self { out, rows: 0 })
    }

    pub fn record(&mut self, reading: &Reading) -> Result<()> {
        writeln!(
            self.out,
            "{},{},{},{}",
            csv_field(&reading.timestamp),
            csv_field(&reading.component),
            csv_field(&reading.sensor_name),
            reading.value
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
