use std::f64::consts::E;

/// Logistic activation: compresses any input into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its own output:
/// `σ'(x) = σ(x) * (1 - σ(x))`.  Callers pass the cached post-activation
/// value, so the forward result never has to be recomputed.
pub fn sigmoid_derivative(output: f64) -> f64 {
    output * (1.0 - output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_strictly_inside_unit_interval() {
        // The plain 1/(1+e^-x) form saturates in f64: to exactly 0.0 once
        // e^-x overflows (x < -709) and to exactly 1.0 once 1 + e^-x rounds
        // to 1.0 (x > ~36.7).  Sweep the range where it stays strict.
        let mut x = -700.0;
        while x <= 35.0 {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y} escaped (0, 1)");
            x += 3.5;
        }
    }

    #[test]
    fn midpoint_and_symmetry() {
        assert_eq!(sigmoid(0.0), 0.5);
        for &x in &[0.1, 1.0, 4.2, 17.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert_eq!(sigmoid_derivative(0.5), 0.25);
        assert!(sigmoid_derivative(0.9) < 0.25);
        assert!(sigmoid_derivative(0.1) < 0.25);
    }
}
