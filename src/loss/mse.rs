pub struct MseLoss;

impl MseLoss {
    /// Squared error for one scalar prediction: `(predicted - target)²`.
    /// The trainer averages this over a pass to report progress; the update
    /// rule itself is the sigmoid-delta rule hardwired into the neurons.
    pub fn loss(predicted: f64, target: f64) -> f64 {
        (predicted - target).powi(2)
    }
}
