use nalgebra::{DMatrix, DVector};
use rand::Rng;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// A single threshold unit with sign activation, for linearly separable logic
/// tables encoded in {-1, 1}. The bias is folded into `weights[0]` against a
/// constant 1 input.
#[derive(Debug, Clone)]
pub struct Perceptron {
    weights: DVector<f64>,
}

impl Perceptron {

    /// Creates a perceptron for `inputs` features, all weights zero.
    pub fn new(inputs: usize) -> Self {
        Self {
            weights: DVector::zeros(inputs + 1),
        }
    }

    pub fn weights(&self) -> &DVector<f64> {
        &self.weights
    }

    fn sign(s: f64) -> f64 {
        if s > 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    fn augment(input: &DVector<f64>) -> DVector<f64> {
        let mut x = DVector::zeros(input.len() + 1);
        x[0] = 1.0;
        x.rows_mut(1, input.len()).copy_from(input);
        x
    }

    /// The classification (1 or -1) for an input vector
    pub fn output(&self, input: &DVector<f64>) -> f64 {
        Self::sign(self.weights.dot(&Self::augment(input)))
    }

    /// Error-correction training: full passes over the samples, nudging the
    /// weights on every misclassification (and kicking them off a weighted sum
    /// of exactly zero), until a pass makes no change. Returns whether the
    /// weights stabilized within `max_epochs` passes; they never will for a
    /// table that is not linearly separable.
    pub fn train(&mut self, samples: &[(DVector<f64>, f64)], max_epochs: usize) -> bool {
        for _ in 0..max_epochs {
            let mut changed = false;
            for (input, target) in samples {
                let x = Self::augment(input);
                let s = self.weights.dot(&x);
                if s == 0.0 {
                    self.weights += &x * *target;
                    changed = true;
                } else if Self::sign(s) != *target {
                    self.weights += &x * (0.5 * (target - Self::sign(s)));
                    changed = true;
                }
            }
            if !changed {
                return true;
            }
        }
        false
    }

}

/// One fully connected layer of sigmoid neurons.
#[derive(Debug, Clone)]
pub struct NeuronLayer {
    pub weights: DMatrix<f64>,
    pub bias: DVector<f64>,
}

impl NeuronLayer {

    pub fn new(neurons: usize, prev_neurons: usize) -> Self {
        Self {
            weights: DMatrix::zeros(neurons, prev_neurons),
            bias: DVector::zeros(neurons),
        }
    }

    pub fn randomize(&mut self) {
        let mut rng = rand::thread_rng();
        self.weights = self.weights.map(|_| rng.gen_range(-0.5..0.5));
        self.bias = self.bias.map(|_| rng.gen_range(-0.5..0.5));
    }

    pub fn feed(&self, input: &DVector<f64>) -> DVector<f64> {
        (&self.weights * input + &self.bias).map(sigmoid)
    }

    fn neurons(&self) -> usize {
        self.bias.len()
    }

}

/// A small feed-forward network of sigmoid layers, trained with per-sample
/// gradient descent. Enough to solve the nonlinear toy problems (XOR) that a
/// single [`Perceptron`] cannot.
#[derive(Clone)]
pub struct SigmoidNetwork {
    input_size: usize,
    pub layers: Vec<NeuronLayer>,
}

impl SigmoidNetwork {

    /// Create a new network based on the input size
    pub fn new(input_size: usize) -> Self {
        Self {
            input_size,
            layers: vec![],
        }
    }

    /// Adds a fully connected sigmoid layer with n neurons to the end of the network
    pub fn add_layer(&mut self, neurons: usize) {
        let prev_neurons = match self.layers.last() {
            Some(l) => l.neurons(),
            None => self.input_size,
        };
        self.layers.push(NeuronLayer::new(neurons, prev_neurons));
    }

    /// Randomizes the weights and biases in the network
    pub fn randomize(&mut self) {
        for layer in &mut self.layers {
            layer.randomize();
        }
    }

    /// Feed input to the network and get the resulting output (the prediction)
    pub fn feed(&self, input: &DVector<f64>) -> DVector<f64> {
        let mut last = input.clone();
        for layer in &self.layers {
            last = layer.feed(&last);
        }
        last
    }

    /// One gradient step on a single sample; returns its squared error.
    fn train_one(&mut self, input: &DVector<f64>, target: &DVector<f64>, rate: f64) -> f64 {
        // Forward pass, remembering every layer's activation
        let mut activations: Vec<DVector<f64>> = Vec::with_capacity(self.layers.len());
        for (i, layer) in self.layers.iter().enumerate() {
            let prev = if i == 0 { input } else { &activations[i - 1] };
            let out = layer.feed(prev);
            activations.push(out);
        }
        let output = activations.last().unwrap();
        let error = target - output;
        let squared_error = error.map(|v| v * v).sum();

        // Backward pass: the sigmoid derivative is u * (1 - u) in terms of the
        // activation itself, so no pre-activation values need to be kept
        let count = self.layers.len();
        let mut deltas: Vec<DVector<f64>> = vec![DVector::zeros(0); count];
        deltas[count - 1] = error.component_mul(&output.map(|u| u * (1.0 - u)));
        for l in (0..count - 1).rev() {
            let back = self.layers[l + 1].weights.transpose() * &deltas[l + 1];
            deltas[l] = back.component_mul(&activations[l].map(|u| u * (1.0 - u)));
        }

        // Apply the updates only after every delta is computed
        for (l, layer) in self.layers.iter_mut().enumerate() {
            let prev = if l == 0 { input } else { &activations[l - 1] };
            layer.weights += (&deltas[l] * prev.transpose()) * rate;
            layer.bias += &deltas[l] * rate;
        }
        squared_error
    }

    /// Trains the network with in-order per-sample gradient descent.
    /// A `print_every` of 0 keeps the loop silent.
    pub fn fit(
        &mut self,
        inputs: &[DVector<f64>],
        targets: &[DVector<f64>],
        epochs: usize,
        print_every: usize,
        learning_rate: f64,
    ) {
        assert_eq!(
            inputs.len(),
            targets.len(),
            "Number of training inputs and targets must match"
        );
        assert!(!self.layers.is_empty(), "Network needs at least one layer");
        for epoch in 0..epochs {
            let mut loss = 0.0;
            for (input, target) in inputs.iter().zip(targets) {
                loss += self.train_one(input, target, learning_rate);
            }
            if print_every != 0 && epoch % print_every == 0 {
                println!("[Fit] Epoch: {}/{} loss: {}", epoch + 1, epochs, loss);
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn and_table() -> Vec<(DVector<f64>, f64)> {
        vec![
            (DVector::from_column_slice(&[-1.0, -1.0]), -1.0),
            (DVector::from_column_slice(&[-1.0, 1.0]), -1.0),
            (DVector::from_column_slice(&[1.0, -1.0]), -1.0),
            (DVector::from_column_slice(&[1.0, 1.0]), 1.0),
        ]
    }

    #[test]
    fn untrained_perceptron_outputs_minus_one() {
        let p = Perceptron::new(2);
        assert_eq!(p.output(&DVector::from_column_slice(&[1.0, 1.0])), -1.0);
    }

    #[test]
    fn perceptron_learns_and_gate() {
        let mut p = Perceptron::new(2);
        let samples = and_table();
        assert!(p.train(&samples, 10));
        for (input, target) in &samples {
            assert_eq!(p.output(input), *target);
        }
        // the run is deterministic from zero weights
        assert_eq!(p.weights().as_slice(), &[-1.0, 1.0, 1.0]);
    }

    #[test]
    fn zero_weight_layer_outputs_one_half() {
        let mut net = SigmoidNetwork::new(3);
        net.add_layer(2);
        let out = net.feed(&DVector::from_column_slice(&[0.3, -0.7, 1.2]));
        assert_eq!(out.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn sigmoid_network_learns_xor() {
        let mut net = SigmoidNetwork::new(2);
        net.add_layer(2);
        net.add_layer(1);
        // fixed starting weights keep the test deterministic
        net.layers[0].weights = DMatrix::from_row_slice(2, 2, &[0.8, -0.6, -0.7, 0.9]);
        net.layers[0].bias = DVector::from_column_slice(&[0.2, -0.3]);
        net.layers[1].weights = DMatrix::from_row_slice(1, 2, &[0.6, -0.8]);
        net.layers[1].bias = DVector::from_column_slice(&[0.1]);

        let inputs: Vec<_> = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
            .iter()
            .map(|v| DVector::from_column_slice(v))
            .collect();
        let targets: Vec<_> = [0.0, 1.0, 1.0, 0.0]
            .iter()
            .map(|v| DVector::from_column_slice(&[*v]))
            .collect();

        net.fit(&inputs, &targets, 20000, 0, 0.5);
        for (input, target) in inputs.iter().zip(&targets) {
            assert!((net.feed(input)[0] - target[0]).abs() < 0.1);
        }
    }
}
