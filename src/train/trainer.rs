use std::fs::File;
use std::io::BufWriter;

use log::warn;

use crate::report::csv_log::CsvLog;
use crate::train::loop_fn::train_loop;
use crate::train::step_record::TrainSummary;
use crate::train::train_config::TrainConfig;

/// Runs a full training session, opening the CSV log named by `config` when
/// logging is enabled.
///
/// A log file that cannot be created is reported with `warn!` and the run
/// continues without it. The file is flushed and closed before returning, and
/// `rows_logged` is the count `CsvLog::finish` confirms after that flush.
pub fn train(config: &TrainConfig) -> TrainSummary {
    let mut log = open_log(config);
    let mut summary = train_loop(config, log.as_mut());
    if let Some(log) = log {
        summary.rows_logged = log.finish();
    }
    summary
}

fn open_log(config: &TrainConfig) -> Option<CsvLog<BufWriter<File>>> {
    if !config.logs_csv() {
        return None;
    }
    let path = config.csv_path.as_deref()?;
    match CsvLog::create(path) {
        Ok(log) => Some(log),
        Err(e) => {
            warn!("could not open CSV log {path}, continuing without it: {e}");
            None
        }
    }
}
