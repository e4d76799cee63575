use crate::neuron::neuron::{Neuron, StepResult};

#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient descent update to the neuron from a step's gradients.
    pub fn step(&self, neuron: &mut Neuron, result: &StepResult) {
        neuron.apply_gradients(result.d_cost_d_weight, result.d_cost_d_bias, self.learning_rate);
    }
}
