use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::neuron::neuron::Neuron;

/// Step size for the per-weight gradient-descent update; override through
/// the `learn_rate` field.  0.5 is a workable starting point for the XOR
/// scale of problem.
pub const DEFAULT_LEARN_RATE: f64 = 0.5;

/// One layer: a contiguous index range into the network's neuron arena.
/// Layers are stored input-first, so layer `k` feeds layer `k + 1`.
#[derive(Debug, Clone, Copy)]
struct Layer {
    start: usize,
    size: usize,
}

impl Layer {
    fn range(&self) -> Range<usize> {
        self.start..self.start + self.size
    }
}

/// A fully-connected layered network of sigmoid units.
///
/// All neurons live in a single arena in layer order; that ordering doubles
/// as the flattened list the uniform weight-update pass walks.  The weight a
/// child uses for a given parent sits at the parent's position within its
/// own layer — an edge index fixed by construction order, so the backward
/// pass never has to search for it.
pub struct Network {
    topology: Vec<usize>,
    neurons: Vec<Neuron>,
    layers: Vec<Layer>,
    pub learn_rate: f64,
}

impl Network {
    /// Builds a network from `topology` (layer widths, input layer first),
    /// drawing initial weights from `rng` in construction order.
    ///
    /// Every input-layer neuron accepts the *entire* external input vector
    /// (`topology[0]` values), not a single component; every neuron in a
    /// later layer accepts one value from each neuron of the previous layer.
    ///
    /// An empty topology is not rejected: the resulting network simply has
    /// no layers and performs no useful work on later calls.
    pub fn new(topology: &[usize], rng: &mut impl Rng) -> Network {
        let mut neurons = Vec::new();
        let mut layers = Vec::with_capacity(topology.len());

        let mut input_count = topology.first().copied().unwrap_or(0);
        for &width in topology {
            let start = neurons.len();
            for _ in 0..width {
                neurons.push(Neuron::new(input_count, rng));
            }
            layers.push(Layer { start, size: width });
            input_count = width;
        }

        Network {
            topology: topology.to_vec(),
            neurons,
            layers,
            learn_rate: DEFAULT_LEARN_RATE,
        }
    }

    /// Deterministic constructor: the same seed and topology always produce
    /// the same initial weights.
    pub fn seeded(topology: &[usize], seed: u64) -> Network {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::new(topology, &mut rng)
    }

    /// The layer widths this network was built from.
    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// Forward pass.  The external input vector is fed to every input-layer
    /// neuron; each later layer reads the previous layer's outputs.  Within
    /// a layer the pass is two-phase — load every neuron's full input set,
    /// then compute activations — so no neuron fires on a partial input set.
    ///
    /// Returns the sum of the final layer's outputs: the network's scalar
    /// output for a single-output topology.  For wider final layers the sum
    /// is documented behavior, not a per-output report.
    pub fn get_value(&mut self, input: &[f64]) -> f64 {
        if self.layers.is_empty() {
            return 0.0;
        }

        let mut carried: Vec<f64> = input.to_vec();
        for li in 0..self.layers.len() {
            let layer = self.layers[li];
            for idx in layer.range() {
                self.neurons[idx].load_inputs(&carried);
            }
            for idx in layer.range() {
                self.neurons[idx].compute_value();
            }
            carried = layer.range().map(|i| self.neurons[i].output()).collect();
        }
        carried.iter().sum()
    }

    /// Backward pass: seeds the error at the final layer, then pulls it back
    /// one layer at a time, so every child's error is already in place when
    /// its parents read it.  Each neuron memoizes its error for the step;
    /// repeated calls between forward passes are cache hits.
    pub fn calculate_errors(&mut self, target: f64) {
        for li in (0..self.layers.len()).rev() {
            let layer = self.layers[li];
            if li + 1 == self.layers.len() {
                for idx in layer.range() {
                    self.neurons[idx].calculate_output_error(target);
                }
            } else {
                let next = self.layers[li + 1];
                for (position, idx) in layer.range().enumerate() {
                    // Each child stores its weight for this neuron at this
                    // neuron's position within its own layer.
                    let downstream: f64 = next
                        .range()
                        .map(|c| self.neurons[c].error() * self.neurons[c].weights[position])
                        .sum();
                    self.neurons[idx].calculate_hidden_error(downstream);
                }
            }
        }
    }

    /// One supervised step: forward pass, backward error pass, then a
    /// uniform weight update over every neuron in arena order.  Update order
    /// is inconsequential — each neuron reads only its own cached input
    /// slots and error, never another neuron's post-update state.
    pub fn train(&mut self, input: &[f64], target: f64) {
        self.get_value(input);
        self.calculate_errors(target);
        for neuron in &mut self.neurons {
            neuron.apply_update(self.learn_rate);
        }
    }
}
