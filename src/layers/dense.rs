use rand::Rng;

use crate::activation::activation::Differentiable;
use crate::math::mapper;
use crate::math::matrix::Matrix;
use crate::math::ops;

/// A fully-connected layer: `a = g(W . x + b)`.
///
/// `weights` is `size x input_size`, `biases` is `size x 1`.
#[derive(Debug, Clone)]
pub struct Layer {
    pub input_size: usize,
    pub size: usize,
    pub activator: Differentiable,
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Layer {
    /// Weights are drawn uniformly from `[0, 1)`, biases start at zero.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activator: Differentiable,
        rng: &mut R,
    ) -> Layer {
        Layer {
            input_size,
            size,
            activator,
            weights: Matrix::from_fn(size, input_size, mapper::random(rng)),
            biases: Matrix::zeros(size, 1),
        }
    }

    /// Returns the weighted sum `z` and the activation `g(z)` for `input`.
    pub fn feed_from(&self, input: &Matrix) -> (Matrix, Matrix) {
        let z = ops::add(&ops::dot(&self.weights, input), &self.biases);
        let a = self.activator.f(&z);
        (z, a)
    }

    /// Gradients for this layer given `dL/da` (`cost_grad`), the weighted sum
    /// `z` from the forward pass and the activation that fed the layer.
    ///
    /// Returns `(weights_grad, biases_grad)`; the bias gradient is the layer
    /// delta `cost_grad * g'(z)`.
    pub fn compute_gradients(
        &self,
        cost_grad: &Matrix,
        z: &Matrix,
        incoming: &Matrix,
    ) -> (Matrix, Matrix) {
        let delta = ops::mul(cost_grad, &self.activator.f_prime(z));
        let weights_grad = ops::dot(&delta, &incoming.t());
        (weights_grad, delta)
    }

    /// `W -= lr * dW`, `b -= lr * db`.
    pub fn apply_gradients(&mut self, weights_grad: &Matrix, biases_grad: &Matrix, lr: f64) {
        let mut dw = weights_grad.clone();
        let mut db = biases_grad.clone();
        self.weights = ops::sub(&self.weights, dw.scale(lr));
        self.biases = ops::sub(&self.biases, db.scale(lr));
    }
}
