//! Space-separated CSV log of sampled training iterations.
//!
//! Format:
//! - one header row, `CSV_HEADER`
//! - one row per logged iteration: the integer index followed by seven values
//!   printed with six decimal places, single-space separated, `\n` terminated
//!
//! Logging is best-effort. The first I/O error is reported with `log::warn!`
//! and switches the log off for the rest of the run; training is never
//! interrupted by it.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::train::step_record::StepRecord;

pub const CSV_HEADER: &str =
    "trainingIndex error cost weight bias dCost/dWeight dCost/dBias dCost/dInput";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CsvLog<W: Write> {
    // `None` once a write has failed.
    writer: Option<W>,
    rows: usize,
}

impl CsvLog<BufWriter<File>> {
    /// Creates (or truncates) the file at `path` and writes the header.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        debug!("opened CSV log {}", path.as_ref().display());
        Ok(CsvLog::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvLog<W> {
    /// Wraps `writer` and immediately writes the header row.
    pub fn new(writer: W) -> Self {
        let mut log = CsvLog { writer: Some(writer), rows: 0 };
        log.write_line(CSV_HEADER);
        log
    }

    pub fn write_record(&mut self, record: &StepRecord) {
        if self.write_line(&format_row(record)) {
            self.rows += 1;
        }
    }

    /// Data rows accepted so far, header excluded. Rows may still sit in a
    /// buffered writer; `finish()` gives the count that actually reached it.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// `false` once a write has failed.
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }

    /// Flushes the underlying writer and returns the number of data rows.
    ///
    /// Returns `0` if any write or the final flush failed: with a buffered
    /// writer there is no telling which of the accepted rows were persisted.
    pub fn finish(mut self) -> usize {
        self.flush();
        if self.is_active() {
            self.rows
        } else {
            0
        }
    }

    /// Flushes and hands back the writer, or `None` if logging was disabled
    /// by an earlier error.
    pub fn into_inner(mut self) -> Option<W> {
        self.flush();
        self.writer
    }

    fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                warn!("failed to flush CSV log: {e}");
                self.writer = None;
            }
        }
    }

    fn write_line(&mut self, line: &str) -> bool {
        let Some(writer) = self.writer.as_mut() else {
            return false;
        };
        match writeln!(writer, "{line}") {
            Ok(()) => true,
            Err(e) => {
                warn!("CSV log write failed, disabling log for this run: {e}");
                self.writer = None;
                false
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn format_row(r: &StepRecord) -> String {
    format!(
        "{} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
        r.training_index,
        r.error,
        r.cost,
        r.weight,
        r.bias,
        r.d_cost_d_weight,
        r.d_cost_d_bias,
        r.d_cost_d_input,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(training_index: usize) -> StepRecord {
        StepRecord {
            training_index,
            error: 0.5,
            cost: 0.125,
            weight: 0.3,
            bias: -0.25,
            d_cost_d_weight: 0.0625,
            d_cost_d_bias: 0.0625,
            d_cost_d_input: 0.01875,
        }
    }

    /// Accepts `limit` bytes, then fails every write. Flushing fails when
    /// `fail_flush` is set.
    struct FailingWriter {
        limit: usize,
        written: usize,
        fail_flush: bool,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_flush {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
            }
            Ok(())
        }
    }

    #[test]
    fn rows_use_six_decimals_and_spaces() {
        let mut log = CsvLog::new(Vec::new());
        log.write_record(&record(7));
        assert_eq!(log.rows_written(), 1);
        let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            format!("{CSV_HEADER}\n7 0.500000 0.125000 0.300000 -0.250000 0.062500 0.062500 0.018750\n")
        );
    }

    #[test]
    fn write_failure_disables_the_log() {
        let limit = CSV_HEADER.len() + 1;
        let mut log = CsvLog::new(FailingWriter { limit, written: 0, fail_flush: false });
        assert!(log.is_active());
        log.write_record(&record(0));
        assert!(!log.is_active());
        log.write_record(&record(1));
        assert_eq!(log.rows_written(), 0);
        assert_eq!(log.finish(), 0);
    }

    #[test]
    fn failed_flush_reports_no_rows() {
        let writer = FailingWriter { limit: usize::MAX, written: 0, fail_flush: true };
        let mut log = CsvLog::new(writer);
        log.write_record(&record(0));
        log.write_record(&record(1));
        assert_eq!(log.rows_written(), 2);
        assert_eq!(log.finish(), 0);
    }

    #[test]
    fn finish_reports_rows_after_successful_flush() {
        let mut log = CsvLog::new(Vec::new());
        log.write_record(&record(0));
        log.write_record(&record(9));
        assert_eq!(log.finish(), 2);
    }
}
