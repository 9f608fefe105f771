use fuzzy_engine::SigmoidNetwork;
use nalgebra::DVector;

fn main() {
    // Two sigmoid neurons in the hidden layer are enough for XOR
    let mut network = SigmoidNetwork::new(2);
    network.add_layer(2);
    network.add_layer(1);
    network.randomize();
    // Create training data
    let inputs = vec![
        DVector::from_column_slice(&[0.0, 0.0]),
        DVector::from_column_slice(&[1.0, 0.0]),
        DVector::from_column_slice(&[0.0, 1.0]),
        DVector::from_column_slice(&[1.0, 1.0]),
    ];
    let targets = vec![
        DVector::from_column_slice(&[0.0]),
        DVector::from_column_slice(&[1.0]),
        DVector::from_column_slice(&[1.0]),
        DVector::from_column_slice(&[0.0]),
    ];
    // Print output before training
    for input in &inputs {
        println!("{:?}", network.feed(input).as_slice());
    }
    // Train network
    network.fit(&inputs, &targets, 50000, 10000, 0.2);
    // Print output after training
    for input in &inputs {
        println!("{:?}", network.feed(input).as_slice());
    }
}
