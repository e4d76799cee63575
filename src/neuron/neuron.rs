use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::loss::half_squared::HalfSquaredError;

/// One fixed training pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: f64,
    pub desired_output: f64,
}

impl Sample {
    pub fn new(input: f64, desired_output: f64) -> Sample {
        Sample { input, desired_output }
    }
}

/// Everything one forward/backward pass produces.
///
/// Nothing here is retained between iterations; the training loop recomputes
/// it from the current parameters every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub actual_output: f64,
    pub error: f64,
    pub cost: f64,
    pub d_cost_d_weight: f64,
    pub d_cost_d_bias: f64,
    /// Not used for training; reported so the input sensitivity can be inspected.
    pub d_cost_d_input: f64,
}

/// A single sigmoid neuron with one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub weight: f64,
    pub bias: f64,
    pub activator: ActivationFunction,
}

impl Neuron {
    pub fn new(weight: f64, bias: f64) -> Neuron {
        Neuron { weight, bias, activator: ActivationFunction::Sigmoid }
    }

    /// Weighted input Z = input * weight + bias.
    pub fn weighted_input(&self, input: f64) -> f64 {
        input * self.weight + self.bias
    }

    pub fn forward(&self, input: f64) -> f64 {
        self.activator.function(self.weighted_input(input))
    }

    /// Forward pass plus closed-form backward pass for one sample.
    pub fn step(&self, sample: &Sample) -> StepResult {
        let o = self.forward(sample.input);

        let error = HalfSquaredError::error(o, sample.desired_output);
        let cost = HalfSquaredError::loss(o, sample.desired_output);

        // δ = dC/dO * dO/dZ, which is also dC/dBias since dZ/dBias = 1
        let d_cost_d_o = HalfSquaredError::derivative(o, sample.desired_output);
        let d_o_d_z = self.activator.derivative_from_output(o);
        let neuron_error = d_cost_d_o * d_o_d_z;

        StepResult {
            actual_output: o,
            error,
            cost,
            d_cost_d_weight: neuron_error * sample.input,
            d_cost_d_bias: neuron_error,
            d_cost_d_input: neuron_error * self.weight,
        }
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, d_cost_d_weight: f64, d_cost_d_bias: f64, lr: f64) {
        self.weight -= d_cost_d_weight * lr;
        self.bias -= d_cost_d_bias * lr;
    }
}

/// Free-function form of [`Neuron::step`].
pub fn neuron_step(input: f64, desired_output: f64, weight: f64, bias: f64) -> StepResult {
    Neuron::new(weight, bias).step(&Sample::new(input, desired_output))
}
