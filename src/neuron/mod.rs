pub mod neuron;

pub use neuron::{neuron_step, Neuron, Sample, StepResult};
