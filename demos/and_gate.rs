use fuzzy_engine::Perceptron;
use nalgebra::DVector;

fn main() {
    // AND gate in {-1, 1} encoding
    let samples = vec![
        (DVector::from_column_slice(&[-1.0, -1.0]), -1.0),
        (DVector::from_column_slice(&[-1.0, 1.0]), -1.0),
        (DVector::from_column_slice(&[1.0, -1.0]), -1.0),
        (DVector::from_column_slice(&[1.0, 1.0]), 1.0),
    ];

    let mut perceptron = Perceptron::new(2);
    let converged = perceptron.train(&samples, 100);
    println!("converged: {}", converged);
    println!("weights: {:?}", perceptron.weights().as_slice());

    for (input, target) in &samples {
        println!(
            "{:?} -> {} (expected {})",
            input.as_slice(),
            perceptron.output(input),
            target
        );
    }

    // Separation line in the input plane: u2 = -(w1/w2) u1 - w0/w2
    let w = perceptron.weights();
    println!("separation line: u2 = {} * u1 + {}", -w[1] / w[2], -w[0] / w[2]);
}
