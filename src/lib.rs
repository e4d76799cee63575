pub mod activation;
pub mod loss;
pub mod neuron;
pub mod optim;
pub mod report;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use loss::half_squared::HalfSquaredError;
pub use neuron::neuron::{neuron_step, Neuron, Sample, StepResult};
pub use optim::sgd::Sgd;
pub use report::csv_log::{CsvLog, CSV_HEADER};
pub use train::{train, train_loop, SampleSchedule, StepRecord, TrainConfig, TrainSummary};
