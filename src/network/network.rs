use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use tracing::info;

use crate::activation::activation::Differentiable;
use crate::error::{NnError, Result};
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::backprop::{self, Gradients};

/// A fully-connected feed-forward neural network.
///
/// Layer parameters sit behind a reader-writer lock: any number of
/// [`predict`](Network::predict) calls may run in parallel, and weight
/// updates made by the trainer take the write lock.
pub struct Network {
    layers: RwLock<Vec<Layer>>,
    input_size: usize,
    output_size: usize,
}

/// Per-layer weighted sums `z` and activations `a = g(z)` of one forward pass.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    pub weighted_sums: Vec<Matrix>,
    pub activations: Vec<Matrix>,
}

impl ForwardPass {
    /// Activation of the last layer.
    pub fn output(&self) -> &Matrix {
        self.activations
            .last()
            .expect("forward pass over a non-empty network")
    }
}

impl Network {
    pub fn builder(input_size: usize) -> NetworkBuilder {
        NetworkBuilder {
            input_size,
            layers: Vec::new(),
        }
    }

    /// Builds a network from `(units, activation)` descriptors, in order.
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        layers: Vec<(usize, Differentiable)>,
        rng: &mut R,
    ) -> Result<Network> {
        NetworkBuilder { input_size, layers }.build(rng)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn layer_count(&self) -> usize {
        self.read_layers().len()
    }

    /// Unit count of every layer, input side first.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.read_layers().iter().map(|l| l.size).collect()
    }

    /// Snapshot of layer `index`'s weights.
    pub fn weights(&self, index: usize) -> Option<Matrix> {
        self.read_layers().get(index).map(|l| l.weights.clone())
    }

    /// Snapshot of layer `index`'s biases.
    pub fn biases(&self, index: usize) -> Option<Matrix> {
        self.read_layers().get(index).map(|l| l.biases.clone())
    }

    /// Runs a forward pass and returns the output layer's activation.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        let pass = self.forward_pass(inputs)?;
        Ok(pass.output().values())
    }

    /// Forward pass retaining every layer's weighted sum and activation.
    pub fn forward_pass(&self, inputs: &[f64]) -> Result<ForwardPass> {
        let x = self.input_matrix(inputs)?;
        let layers = self.read_layers();
        Ok(forward(&layers, &x))
    }

    /// Derives per-layer gradients from a forward pass over input `x` and
    /// the loss derivative `cost_grad` at the output.
    ///
    /// Takes its own read lock, separate from the one `forward_pass` took;
    /// the trainer runs both under a single write lock instead.
    pub fn back_propagate(&self, pass: &ForwardPass, x: &Matrix, cost_grad: Matrix) -> Gradients {
        let layers = self.read_layers();
        backprop::back_propagate(&layers, pass, x, cost_grad)
    }

    pub(crate) fn input_matrix(&self, inputs: &[f64]) -> Result<Matrix> {
        if inputs.len() != self.input_size {
            return Err(NnError::InputLength {
                expected: self.input_size,
                actual: inputs.len(),
            });
        }
        Ok(Matrix::column(inputs))
    }

    pub(crate) fn output_matrix(&self, outputs: &[f64]) -> Result<Matrix> {
        if outputs.len() != self.output_size {
            return Err(NnError::OutputLength {
                expected: self.output_size,
                actual: outputs.len(),
            });
        }
        Ok(Matrix::column(outputs))
    }

    // A panicking writer leaves layer shapes intact.
    pub(crate) fn read_layers(&self) -> RwLockReadGuard<'_, Vec<Layer>> {
        self.layers.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_layers(&self) -> RwLockWriteGuard<'_, Vec<Layer>> {
        self.layers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Forward pass over already-validated input `x`.
pub(crate) fn forward(layers: &[Layer], x: &Matrix) -> ForwardPass {
    let mut weighted_sums = Vec::with_capacity(layers.len());
    let mut activations: Vec<Matrix> = Vec::with_capacity(layers.len());

    for layer in layers {
        let incoming = activations.last().unwrap_or(x);
        let (z, a) = layer.feed_from(incoming);
        weighted_sums.push(z);
        activations.push(a);
    }

    ForwardPass {
        weighted_sums,
        activations,
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network{{in={}, out={}}}", self.input_size, self.output_size)
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("input_size", &self.input_size)
            .field("output_size", &self.output_size)
            .field("layers", &self.layer_sizes())
            .finish()
    }
}

/// Appends layers in order; each layer's input size is the previous layer's
/// unit count (or the network input size for the first layer).
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    input_size: usize,
    layers: Vec<(usize, Differentiable)>,
}

impl NetworkBuilder {
    pub fn layer(mut self, size: usize, activation: impl Into<Differentiable>) -> Self {
        self.layers.push((size, activation.into()));
        self
    }

    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        if self.input_size == 0 {
            return Err(NnError::InvalidSize { what: "input size" });
        }
        if self.layers.is_empty() {
            return Err(NnError::NoLayers);
        }
        if self.layers.iter().any(|&(size, _)| size == 0) {
            return Err(NnError::InvalidSize { what: "layer size" });
        }

        let mut layers = Vec::with_capacity(self.layers.len());
        let mut input_size = self.input_size;
        for (size, activation) in self.layers {
            layers.push(Layer::new(size, input_size, activation, rng));
            input_size = size;
        }

        let network = Network {
            input_size: self.input_size,
            output_size: input_size,
            layers: RwLock::new(layers),
        };
        info!(
            input_size = network.input_size,
            output_size = network.output_size,
            layers = ?network.layer_sizes(),
            "network built"
        );
        Ok(network)
    }
}
