use rand::Rng;

use crate::activation::sigmoid::{sigmoid, sigmoid_derivative};

// Every neuron carries one extra input slot pinned to 1.0 so the bias weight
// trains like any other weight; pinning it to 0.0 instead leaves the bias
// weight permanently inert.
const USE_BIAS: bool = true;

/// A single sigmoid unit: a weight per input plus a bias weight, an input
/// slot buffer of the same shape, and the cached output/error of the most
/// recent forward/backward pass.
#[derive(Debug)]
pub struct Neuron {
    pub weights: Vec<f64>,
    inputs: Vec<f64>,
    output: f64,
    error: f64,
}

impl Neuron {
    /// Creates a neuron accepting `input_count` inputs plus the bias slot.
    ///
    /// Each weight is drawn as `u1 - u2` with `u1`, `u2` independent uniform
    /// samples in [0, 1) — a triangular distribution on (-1, 1), not a
    /// uniform one.  The RNG is shared across every neuron of a network, so
    /// construction order alone determines the initial weight sets.
    pub fn new(input_count: usize, rng: &mut impl Rng) -> Neuron {
        let weights = (0..input_count + 1)
            .map(|_| rng.gen::<f64>() - rng.gen::<f64>())
            .collect();

        let mut inputs = vec![0.0; input_count + 1];
        inputs[input_count] = if USE_BIAS { 1.0 } else { 0.0 };

        Neuron {
            weights,
            inputs,
            output: 0.0,
            error: 0.0,
        }
    }

    /// Loads one full set of values into the non-bias input slots and
    /// invalidates the error cached by any previous training step.
    ///
    /// Input length is the caller's contract: excess values are ignored,
    /// missing values leave the previous slot contents in place.
    pub fn load_inputs(&mut self, values: &[f64]) {
        self.error = 0.0;
        let slots = self.inputs.len() - 1;
        for (slot, value) in self.inputs[..slots].iter_mut().zip(values) {
            *slot = *value;
        }
    }

    /// Weighted sum of every input slot (bias included) through the sigmoid;
    /// caches and returns the result.
    pub fn compute_value(&mut self) -> f64 {
        let sum: f64 = self
            .inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum();
        self.output = sigmoid(sum);
        self.output
    }

    /// Last computed post-activation output.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Last computed error term; 0.0 means "not yet computed this step".
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Error term for a final-layer neuron:
    /// `σ'(output) * (target - output)`.
    ///
    /// Memoized on `error != 0.0`: within one training step the first call
    /// computes, later calls return the cache.  An error that lands on
    /// exactly 0.0 is indistinguishable from "not computed" and gets
    /// recomputed on the next call — a documented quirk of the memo guard,
    /// kept as-is.
    pub fn calculate_output_error(&mut self, target: f64) -> f64 {
        if self.error != 0.0 {
            return self.error;
        }
        self.error = sigmoid_derivative(self.output) * (target - self.output);
        self.error
    }

    /// Error term for an interior neuron.  `downstream` is the sum over the
    /// next layer of each child's error times the weight that child applies
    /// to this neuron's output.  Same memo guard as
    /// [`calculate_output_error`](Self::calculate_output_error).
    pub fn calculate_hidden_error(&mut self, downstream: f64) -> f64 {
        if self.error != 0.0 {
            return self.error;
        }
        self.error = sigmoid_derivative(self.output) * downstream;
        self.error
    }

    /// One gradient-descent step over this neuron's own weights, using the
    /// input slots and error as cached by the latest forward/backward pass.
    pub fn apply_update(&mut self, learn_rate: f64) {
        for (weight, input) in self.weights.iter_mut().zip(&self.inputs) {
            *weight += learn_rate * input * self.error;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1337)
    }

    #[test]
    fn weight_and_slot_counts_include_bias() {
        let neuron = Neuron::new(3, &mut rng());
        assert_eq!(neuron.weights.len(), 4);
        assert_eq!(neuron.inputs.len(), 4);
        assert_eq!(neuron.inputs[3], 1.0);
    }

    #[test]
    fn initial_weights_lie_inside_open_unit_ball() {
        let neuron = Neuron::new(200, &mut rng());
        for &w in &neuron.weights {
            assert!(w > -1.0 && w < 1.0);
        }
    }

    #[test]
    fn load_inputs_ignores_excess_and_keeps_stale_slots() {
        let mut neuron = Neuron::new(2, &mut rng());
        neuron.load_inputs(&[0.25, 0.75, 9.0]);
        assert_eq!(neuron.inputs[..2], [0.25, 0.75]);
        assert_eq!(neuron.inputs[2], 1.0, "bias slot must stay pinned");

        // A short vector only refreshes the leading slots.
        neuron.load_inputs(&[0.5]);
        assert_eq!(neuron.inputs[..2], [0.5, 0.75]);
    }

    #[test]
    fn compute_value_is_sigmoid_of_weighted_sum() {
        let mut neuron = Neuron::new(2, &mut rng());
        neuron.weights = vec![0.3, -0.2, 0.1];
        neuron.load_inputs(&[1.0, 0.5]);
        let expected = sigmoid(1.0 * 0.3 + 0.5 * (-0.2) + 1.0 * 0.1);
        assert_eq!(neuron.compute_value(), expected);
        assert_eq!(neuron.output(), expected);
    }

    #[test]
    fn output_error_is_memoized_within_a_step() {
        let mut neuron = Neuron::new(2, &mut rng());
        neuron.load_inputs(&[1.0, 0.0]);
        neuron.compute_value();

        let first = neuron.calculate_output_error(1.0);
        assert_ne!(first, 0.0);
        // Cache hit: a different target must not change the stored error.
        let second = neuron.calculate_output_error(0.0);
        assert_eq!(first, second);

        // A new input cycle invalidates the cache.
        neuron.load_inputs(&[1.0, 0.0]);
        neuron.compute_value();
        let recomputed = neuron.calculate_output_error(0.0);
        assert_ne!(recomputed, first);
    }

    #[test]
    fn exactly_zero_error_recomputes_on_next_read() {
        let mut neuron = Neuron::new(2, &mut rng());
        neuron.load_inputs(&[1.0, 1.0]);
        let output = neuron.compute_value();

        // target == output makes the freshly computed error exactly 0.0,
        // which the memo guard cannot tell apart from "not yet computed".
        assert_eq!(neuron.calculate_output_error(output), 0.0);
        let retried = neuron.calculate_output_error(1.0);
        assert_ne!(retried, 0.0, "zero error must re-trigger computation");
    }

    #[test]
    fn apply_update_moves_each_weight_by_rate_input_error() {
        let mut neuron = Neuron::new(2, &mut rng());
        neuron.weights = vec![0.1, 0.2, 0.3];
        neuron.load_inputs(&[1.0, 0.5]);
        neuron.compute_value();
        let error = neuron.calculate_output_error(1.0);

        neuron.apply_update(0.5);
        assert_eq!(neuron.weights[0], 0.1 + 0.5 * 1.0 * error);
        assert_eq!(neuron.weights[1], 0.2 + 0.5 * 0.5 * error);
        assert_eq!(neuron.weights[2], 0.3 + 0.5 * 1.0 * error);
    }

    #[test]
    fn single_unit_cannot_separate_xor() {
        // One sigmoid unit over both inputs is a linear separator; the four
        // XOR constraints are infeasible for it no matter the training
        // budget, so at least one pair must land on the wrong side of 0.5.
        let mut neuron = Neuron::new(2, &mut rng());
        let pairs: [([f64; 2], f64); 4] = [
            ([0.0, 0.0], 0.0),
            ([1.0, 0.0], 1.0),
            ([0.0, 1.0], 1.0),
            ([1.0, 1.0], 0.0),
        ];

        for _ in 0..10_000 {
            for (input, target) in &pairs {
                neuron.load_inputs(input);
                neuron.compute_value();
                neuron.calculate_output_error(*target);
                neuron.apply_update(0.5);
            }
        }

        let correct = pairs
            .iter()
            .filter(|(input, target)| {
                neuron.load_inputs(input);
                let out = neuron.compute_value();
                (out > 0.5) == (*target > 0.5)
            })
            .count();
        assert!(correct < 4, "a hiddenless unit separated XOR");
    }
}
