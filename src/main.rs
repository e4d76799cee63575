use neuron_backprop::{train, TrainConfig};

// Trains the single-neuron example and prints its final error.
// Sampled iterations go to Example1.csv; diagnostics go to stderr via RUST_LOG.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = TrainConfig::default();
    let summary = train(&config);

    println!("{}", summary.final_error_line());
}
