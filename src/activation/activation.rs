/// Largest `f64` strictly below `1.0`.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Activation applied to the neuron's weighted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationFunction {
    /// Logistic function. Kept inside the open interval (0, 1): for weighted
    /// inputs of large magnitude the raw `f64` result rounds to exactly `1.0`
    /// or `0.0`, so it is clamped to the nearest value inside the range.
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let o = 1.0 / (1.0 + (-x).exp());
                o.clamp(f64::MIN_POSITIVE, BELOW_ONE)
            }
        }
    }

    /// dO/dZ expressed through the activation value `o`.
    pub fn derivative_from_output(&self, o: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => o * (1.0 - o),
        }
    }

    pub fn derivative(&self, x: f64) -> f64 {
        self.derivative_from_output(self.function(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_half() {
        assert_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_eq!(ActivationFunction::Sigmoid.derivative(0.0), 0.25);
    }

    #[test]
    fn saturated_inputs_stay_inside_open_interval() {
        for x in [-1000.0, -40.0, 40.0, 1000.0] {
            let o = ActivationFunction::Sigmoid.function(x);
            assert!(o > 0.0 && o < 1.0, "sigmoid({x}) = {o}");
        }
    }
}
