use serde::{Serialize, Deserialize};

use crate::neuron::neuron::Sample;

/// Hyper-parameters and logging options for a training run.
///
/// # Fields
/// - `iterations`     — exact number of gradient descent steps; there is no
///                      convergence check
/// - `learning_rate`  — step size applied to both gradients
/// - `initial_weight` / `initial_bias` — starting parameters
/// - `sample`         — the single training pair used on every iteration
/// - `csv_samples`    — number of evenly spaced rows to log; `0` disables the log
/// - `csv_path`       — file the rows are written to; `None` disables the log
///
/// `Default` reproduces the classic one-neuron example: input 1, target 0,
/// weight 0.3, bias 0.5, rate 0.5, 10000 iterations, 50 rows to `Example1.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub learning_rate: f64,
    pub initial_weight: f64,
    pub initial_bias: f64,
    pub sample: Sample,
    pub csv_samples: usize,
    pub csv_path: Option<String>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            iterations: 10_000,
            learning_rate: 0.5,
            initial_weight: 0.3,
            initial_bias: 0.5,
            sample: Sample::new(1.0, 0.0),
            csv_samples: 50,
            csv_path: Some("Example1.csv".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl TrainConfig {
    /// Same parameters with CSV logging switched off.
    pub fn without_csv(mut self) -> Self {
        self.csv_samples = 0;
        self.csv_path = None;
        self
    }

    /// Whether a run with this config should try to open a CSV log.
    pub fn logs_csv(&self) -> bool {
        self.csv_samples > 0 && self.csv_path.is_some()
    }

    /// Rejects values that would make the run meaningless (NaN, infinities,
    /// a learning rate that does not descend).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        let finite = [
            ("initial_weight", self.initial_weight),
            ("initial_bias", self.initial_bias),
            ("sample.input", self.sample.input),
            ("sample.desired_output", self.sample.desired_output),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes and validates a config from a JSON file. Missing fields
    /// take their default values.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config.validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
