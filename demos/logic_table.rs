use std::io::{self, BufRead, Write};

use fuzzy_engine::Perceptron;
use nalgebra::DVector;

/// Trains a perceptron on an arbitrary 3-input logic table (only the
/// (1, -1, 1) row is true) and then answers interactive queries from stdin.
fn main() {
    let samples: Vec<(DVector<f64>, f64)> = [
        ([-1.0, -1.0, -1.0], -1.0),
        ([-1.0, -1.0, 1.0], -1.0),
        ([-1.0, 1.0, -1.0], -1.0),
        ([-1.0, 1.0, 1.0], -1.0),
        ([1.0, -1.0, -1.0], -1.0),
        ([1.0, -1.0, 1.0], 1.0),
        ([1.0, 1.0, -1.0], -1.0),
    ]
    .iter()
    .map(|(inputs, target)| (DVector::from_column_slice(inputs), *target))
    .collect();

    let mut perceptron = Perceptron::new(3);
    let converged = perceptron.train(&samples, 100);
    println!("converged: {}", converged);
    println!("weights: {:?}", perceptron.weights().as_slice());

    let stdin = io::stdin();
    loop {
        print!("Enter u1 u2 u3 (blank line to quit): ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let values: Vec<f64> = line
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();
        if values.len() != 3 {
            break;
        }
        let input = DVector::from_column_slice(&values);
        println!("Output: {}", perceptron.output(&input));
    }
}
