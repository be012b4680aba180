use protonet::{train_loop, Network, TrainConfig};

fn main() {
    // 2-2-1: two input units (each reads the whole input vector), two
    // hidden units, one output unit.
    let mut network = Network::seeded(&[2, 2, 1], 1337);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![0.0, 1.0, 1.0, 0.0];

    let epochs = 10_000;
    let loss = train_loop(&mut network, &inputs, &targets, &TrainConfig::new(epochs));

    println!("protonet trained @{epochs} epochs (final loss = {loss:.6}).");
    for input in &inputs {
        println!(
            "<{},{}> = {:.4}",
            input[0],
            input[1],
            network.get_value(input)
        );
    }
}
