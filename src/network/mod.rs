pub mod network;
pub mod topology;

pub use network::Network;
pub use topology::TopologySpec;
