use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Runs one online pass over the training set: for each sample, measures the
/// current output, then applies a single supervised step.  Returns the mean
/// squared error as observed *before* each update.
///
/// Samples are visited in the given order — no shuffling — so a seeded
/// network and a fixed set reproduce bit-identical runs.
pub fn train_network(network: &mut Network, inputs: &[Vec<f64>], targets: &[f64]) -> f64 {
    let mut total_loss = 0.0;

    for (input, &target) in inputs.iter().zip(targets.iter()) {
        let output = network.get_value(input);
        total_loss += MseLoss::loss(output, target);
        network.train(input, target);
    }

    total_loss / inputs.len() as f64
}
