use std::io::Write;

use log::{debug, info};

use crate::neuron::neuron::Neuron;
use crate::optim::sgd::Sgd;
use crate::report::csv_log::CsvLog;
use crate::train::schedule::SampleSchedule;
use crate::train::step_record::{StepRecord, TrainSummary};
use crate::train::train_config::TrainConfig;

/// Runs exactly `config.iterations` gradient descent steps on `config.sample`
/// and returns the summary of the run.
///
/// When `log` is given, the iterations chosen by
/// `SampleSchedule::new(config.iterations, config.csv_samples)` are written to
/// it with the parameters the step was computed with. The log is only borrowed;
/// the caller decides when it is flushed and closed.
pub fn train_loop<W: Write>(config: &TrainConfig, mut log: Option<&mut CsvLog<W>>) -> TrainSummary {
    let mut neuron = Neuron::new(config.initial_weight, config.initial_bias);
    let optimizer = Sgd::new(config.learning_rate);
    let schedule = SampleSchedule::new(config.iterations, config.csv_samples);
    let sample = config.sample;

    info!(
        "training {} iterations: input={} target={} weight={} bias={} rate={}",
        config.iterations,
        sample.input,
        sample.desired_output,
        neuron.weight,
        neuron.bias,
        config.learning_rate,
    );

    let mut initial_error = 0.0;
    let mut final_error = 0.0;
    let mut final_cost = 0.0;

    for training_index in 0..config.iterations {
        let result = neuron.step(&sample);

        if training_index == 0 {
            initial_error = result.error;
        }
        final_error = result.error;
        final_cost = result.cost;

        if let Some(log) = log.as_deref_mut() {
            if schedule.contains(training_index) {
                log.write_record(&StepRecord::new(training_index, &neuron, &result));
                debug!("iteration {training_index}: error={:.6} cost={:.6}", result.error, result.cost);
            }
        }

        optimizer.step(&mut neuron, &result);
    }

    let rows_logged = log.map_or(0, |log| log.rows_written());

    info!(
        "finished: error {:.6} -> {:.6}, weight={:.6} bias={:.6}, {} CSV rows",
        initial_error, final_error, neuron.weight, neuron.bias, rows_logged,
    );

    TrainSummary {
        iterations: config.iterations,
        initial_error,
        final_error,
        final_cost,
        weight: neuron.weight,
        bias: neuron.bias,
        rows_logged,
    }
}
