//! Linear-algebra and broadcasting elementwise operations.
//!
//! Every function here returns a fresh matrix and panics on shapes it cannot
//! reconcile; such shapes mean the caller's model definition is wrong.

use crate::math::matrix::Matrix;

/// Matrix product `a . b`.
///
/// # Panics
/// Panics if `a.cols() != b.rows()`.
pub fn dot(a: &Matrix, b: &Matrix) -> Matrix {
    if a.cols() != b.rows() {
        panic!("inner dimensions mismatch: {:?} & {:?}", a.dims(), b.dims());
    }

    let (av, bv) = (a.as_slice(), b.as_slice());
    let (inner, b_cols) = (a.cols(), b.cols());
    Matrix::from_fn(a.rows(), b_cols, |i, j, _| {
        let mut sum = 0.0;
        for k in 0..inner {
            sum += av[i * inner + k] * bv[k * b_cols + j];
        }
        sum
    })
}

/// `a + b` with broadcasting.
pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    broadcast_op(a, b, |x, y| x + y)
}

/// `a - b` with broadcasting.
pub fn sub(a: &Matrix, b: &Matrix) -> Matrix {
    broadcast_op(a, b, |x, y| x - y)
}

/// Elementwise (Hadamard) `a * b` with broadcasting.
pub fn mul(a: &Matrix, b: &Matrix) -> Matrix {
    broadcast_op(a, b, |x, y| x * y)
}

/// Elementwise `a / b` with broadcasting.
pub fn div(a: &Matrix, b: &Matrix) -> Matrix {
    broadcast_op(a, b, |x, y| x / y)
}

fn broadcast_op<F>(a: &Matrix, b: &Matrix, op: F) -> Matrix
where
    F: Fn(f64, f64) -> f64,
{
    let target = higher_dims(a, b);
    let a = broadcast_to(a, target);
    let b = broadcast_to(b, target);

    let values = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| op(x, y))
        .collect();
    Matrix::from_vec(target.0, target.1, values)
}

/// Shape of the operand with more cells; ties go to `b`.
fn higher_dims(a: &Matrix, b: &Matrix) -> (usize, usize) {
    if a.size() > b.size() {
        a.dims()
    } else {
        b.dims()
    }
}

fn broadcast_to(lo: &Matrix, hi: (usize, usize)) -> Matrix {
    let (rows, cols) = lo.dims();
    let v = lo.as_slice();

    if (rows, cols) == hi {
        lo.clone()
    } else if (rows, cols) == (1, 1) {
        // scalar
        Matrix::from_fn(hi.0, hi.1, |_, _, _| v[0])
    } else if cols == 1 && rows == hi.0 {
        // column vector, replicated across columns
        Matrix::from_fn(hi.0, hi.1, |r, _, _| v[r])
    } else if rows == 1 && cols == hi.1 {
        // row vector, replicated across rows
        Matrix::from_fn(hi.0, hi.1, |_, c, _| v[c])
    } else {
        panic!("cannot broadcast {:?} to {:?}", (rows, cols), hi);
    }
}
