use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Trains `network` for `config.epochs` epochs and returns the mean training
/// loss of the **last completed epoch**.
///
/// # Arguments
/// - `network` — mutable reference to the network; modified in place
/// - `inputs`  — training samples, each a `Vec<f64>`
/// - `targets` — corresponding scalar targets, same length as `inputs`
/// - `config`  — epoch count, optional progress channel, optional stop flag
///
/// Updates are online and samples are visited in the given order every
/// epoch, so a seeded network reproduces a run exactly.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Panics
/// Panics if `inputs` is empty, lengths mismatch, or `config.epochs == 0`.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[f64],
    config: &TrainConfig,
) -> f64 {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );
    assert!(config.epochs > 0, "epochs must be at least 1");

    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        // Check stop flag at the top of each epoch.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();
        let train_loss = train_network(network, inputs, targets);
        last_train_loss = train_loss;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    last_train_loss
}
