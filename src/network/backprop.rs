use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::math::ops;
use crate::network::network::ForwardPass;

/// Per-layer gradients, each shaped like the parameter it updates.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

/// Walks the layers from last to first:
///
/// - `delta[l] = cost_grad * g'(z[l])`
/// - `db[l] = delta[l]`
/// - `dW[l] = delta[l] . incoming^T`, where `incoming` is `x` for the first
///   layer and `a[l-1]` otherwise
/// - `cost_grad = W[l]^T . delta[l]` for the layer below
pub(crate) fn back_propagate(
    layers: &[Layer],
    pass: &ForwardPass,
    x: &Matrix,
    mut cost_grad: Matrix,
) -> Gradients {
    let n = layers.len();
    let mut weights = Vec::with_capacity(n);
    let mut biases = Vec::with_capacity(n);

    for l in (0..n).rev() {
        let incoming = if l == 0 { x } else { &pass.activations[l - 1] };
        let (dw, delta) = layers[l].compute_gradients(&cost_grad, &pass.weighted_sums[l], incoming);

        if l > 0 {
            cost_grad = ops::dot(&layers[l].weights.t(), &delta);
        }

        weights.push(dw);
        biases.push(delta);
    }

    // collected output-first
    weights.reverse();
    biases.reverse();
    Gradients { weights, biases }
}
