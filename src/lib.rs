pub mod activation;
pub mod neuron;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::sigmoid;
pub use neuron::neuron::Neuron;
pub use network::network::Network;
pub use network::topology::TopologySpec;
pub use loss::mse::MseLoss;
pub use train::trainer::train_network;
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
pub use train::loop_fn::train_loop;
