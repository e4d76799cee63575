/// Per-sample cost `0.5 * (predicted - expected)²`.
pub struct HalfSquaredError;

impl HalfSquaredError {
    /// Absolute error: |expected - predicted|
    pub fn error(predicted: f64, expected: f64) -> f64 {
        (expected - predicted).abs()
    }

    /// Scalar cost: 0.5 * error²
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        let error = Self::error(predicted, expected);
        0.5 * error * error
    }

    /// dCost/dOutput: predicted - expected
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}
