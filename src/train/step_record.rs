use crate::neuron::neuron::{Neuron, StepResult};

/// One logged training iteration.
///
/// `weight` and `bias` are the parameters the step was computed with, i.e.
/// the values *before* that iteration's gradient descent update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// 0-based iteration index.
    pub training_index: usize,
    pub error: f64,
    pub cost: f64,
    pub weight: f64,
    pub bias: f64,
    pub d_cost_d_weight: f64,
    pub d_cost_d_bias: f64,
    pub d_cost_d_input: f64,
}

impl StepRecord {
    pub fn new(training_index: usize, neuron: &Neuron, result: &StepResult) -> StepRecord {
        StepRecord {
            training_index,
            error: result.error,
            cost: result.cost,
            weight: neuron.weight,
            bias: neuron.bias,
            d_cost_d_weight: result.d_cost_d_weight,
            d_cost_d_bias: result.d_cost_d_bias,
            d_cost_d_input: result.d_cost_d_input,
        }
    }
}

/// Outcome of a complete `train_loop` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainSummary {
    /// Number of iterations actually run.
    pub iterations: usize,
    /// Error computed on the first iteration, before any update.
    pub initial_error: f64,
    /// Error computed on the last iteration (before its update was applied).
    pub final_error: f64,
    pub final_cost: f64,
    /// Parameters after the last update.
    pub weight: f64,
    pub bias: f64,
    /// CSV data rows written, excluding the header. `train` sets this from
    /// the flushed log; `train_loop` reports the rows the log accepted.
    pub rows_logged: usize,
}

impl TrainSummary {
    /// The line the binary prints once training is done.
    pub fn final_error_line(&self) -> String {
        format!("Example1 Final Error: {:.6}", self.final_error)
    }
}
