use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::matrix::Matrix;

/// An activation function paired with its derivative.
///
/// Both halves are plain function pointers operating elementwise and
/// returning a new matrix, so a `Differentiable` carries no state and can be
/// shared freely between layers and threads.
#[derive(Clone, Copy)]
pub struct Differentiable {
    name: &'static str,
    f: fn(&Matrix) -> Matrix,
    f_prime: fn(&Matrix) -> Matrix,
}

impl Differentiable {
    pub fn new(
        name: &'static str,
        f: fn(&Matrix) -> Matrix,
        f_prime: fn(&Matrix) -> Matrix,
    ) -> Differentiable {
        Differentiable { name, f, f_prime }
    }

    /// Logistic function `1 / (1 + e^-x)`.
    pub fn sigmoid() -> Differentiable {
        Differentiable::new("sigmoid", sigmoid, sigmoid_prime)
    }

    /// Rectified linear unit `max(0, x)`.
    pub fn relu() -> Differentiable {
        Differentiable::new("relu", relu, relu_prime)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn f(&self, x: &Matrix) -> Matrix {
        (self.f)(x)
    }

    /// Derivative evaluated at the weighted sum `z` that was fed to `f`.
    pub fn f_prime(&self, z: &Matrix) -> Matrix {
        (self.f_prime)(z)
    }
}

impl fmt::Debug for Differentiable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Differentiable").field(&self.name).finish()
    }
}

fn sigmoid(x: &Matrix) -> Matrix {
    let mut res = x.clone();
    res.apply(|_, _, v| 1.0 / (1.0 + (-v).exp()));
    res
}

fn sigmoid_prime(z: &Matrix) -> Matrix {
    // s(z) * (1 - s(z)), with s(z) recomputed from the weighted sum
    let mut s = sigmoid(z);
    s.apply(|_, _, v| v * (1.0 - v));
    s
}

fn relu(x: &Matrix) -> Matrix {
    let mut res = x.clone();
    res.apply(|_, _, v| v.max(0.0));
    res
}

fn relu_prime(z: &Matrix) -> Matrix {
    let mut res = z.clone();
    res.apply(|_, _, v| if v > 0.0 { 1.0 } else { 0.0 });
    res
}

/// Serializable activation choice, resolved to a [`Differentiable`] when
/// a network is built from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
}

impl ActivationFunction {
    pub fn differentiable(self) -> Differentiable {
        match self {
            ActivationFunction::Sigmoid => Differentiable::sigmoid(),
            ActivationFunction::ReLU => Differentiable::relu(),
        }
    }
}

impl From<ActivationFunction> for Differentiable {
    fn from(choice: ActivationFunction) -> Self {
        choice.differentiable()
    }
}
