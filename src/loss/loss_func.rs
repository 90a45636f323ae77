use std::fmt;

use crate::math::matrix::Matrix;

/// A loss function paired with its derivative with respect to the
/// prediction. Arguments are always `(expected, predicted)`.
#[derive(Clone, Copy)]
pub struct LossFunc {
    name: &'static str,
    f: fn(&Matrix, &Matrix) -> Matrix,
    f_prime: fn(&Matrix, &Matrix) -> Matrix,
}

impl LossFunc {
    pub fn new(
        name: &'static str,
        f: fn(&Matrix, &Matrix) -> Matrix,
        f_prime: fn(&Matrix, &Matrix) -> Matrix,
    ) -> LossFunc {
        LossFunc { name, f, f_prime }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Elementwise loss.
    pub fn f(&self, y: &Matrix, y_hat: &Matrix) -> Matrix {
        (self.f)(y, y_hat)
    }

    /// Elementwise `dL/dy_hat`.
    pub fn f_prime(&self, y: &Matrix, y_hat: &Matrix) -> Matrix {
        (self.f_prime)(y, y_hat)
    }

    /// Sum of the elementwise loss for one sample.
    pub fn total(&self, y: &Matrix, y_hat: &Matrix) -> f64 {
        self.f(y, y_hat).as_slice().iter().sum()
    }
}

impl Default for LossFunc {
    fn default() -> Self {
        crate::loss::squared_error::squared_error()
    }
}

impl fmt::Debug for LossFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LossFunc").field(&self.name).finish()
    }
}
