pub mod csv_log;

pub use csv_log::{CsvLog, CSV_HEADER};
