use crate::loss::loss_func::LossFunc;
use crate::math::mapper;
use crate::math::matrix::Matrix;
use crate::math::ops;

/// Squared error `1/2 (y - y_hat)^2`, derivative `y_hat - y`.
pub fn squared_error() -> LossFunc {
    LossFunc::new("squared_error", loss, derivative)
}

fn loss(y: &Matrix, y_hat: &Matrix) -> Matrix {
    let mut diff = ops::sub(y, y_hat);
    diff.apply(mapper::square).scale(0.5);
    diff
}

fn derivative(y: &Matrix, y_hat: &Matrix) -> Matrix {
    ops::sub(y_hat, y)
}
