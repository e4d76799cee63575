pub mod trainer;
pub mod step_record;
pub mod train_config;
pub mod schedule;
pub mod loop_fn;

pub use trainer::train;
pub use step_record::{StepRecord, TrainSummary};
pub use train_config::{ConfigError, TrainConfig};
pub use schedule::SampleSchedule;
pub use loop_fn::train_loop;
