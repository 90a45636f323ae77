use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::math::ops;

/// Dense matrix of `f64` values stored in row-major order.
///
/// `data.len() == rows * cols` always holds. In-place transforms
/// (`apply`, `scale`, `reset`, `set`) mutate the receiver; clone first when
/// an unaliased copy is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-valued matrix of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive, got {rows}x{cols}");
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from row-major values.
    ///
    /// # Panics
    /// Panics if `values.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f64>) -> Matrix {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive, got {rows}x{cols}");
        if values.len() != rows * cols {
            panic!(
                "need exactly {} values for matrix of dimensions=({}, {}), got {}",
                rows * cols,
                rows,
                cols,
                values.len()
            );
        }
        Matrix { rows, cols, data: values }
    }

    /// Column vector (`len x 1`) holding a copy of `values`.
    pub fn column(values: &[f64]) -> Matrix {
        Matrix::from_vec(values.len(), 1, values.to_vec())
    }

    /// Zero matrix filled cell-by-cell with `mapper(row, col, 0.0)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mapper: F) -> Matrix
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        let mut m = Matrix::zeros(rows, cols);
        m.apply(mapper);
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Exact comparison of dimensions and every cell, no tolerance.
    pub fn equals(&self, other: &Matrix) -> bool {
        self == other
    }

    /// Copy of the backing store, row-major.
    pub fn values(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Replaces every cell `(r, c)` holding `v` with `mapper(r, c, v)`.
    pub fn apply<F>(&mut self, mut mapper: F) -> &mut Self
    where
        F: FnMut(usize, usize, f64) -> f64,
    {
        let cols = self.cols;
        for (i, val) in self.data.iter_mut().enumerate() {
            *val = mapper(i / cols, i % cols, *val);
        }
        self
    }

    /// Resets every cell to zero.
    pub fn reset(&mut self) -> &mut Self {
        self.data.iter_mut().for_each(|v| *v = 0.0);
        self
    }

    /// Multiplies every cell by `factor`.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.data.iter_mut().for_each(|v| *v *= factor);
        self
    }

    /// Transpose: a new `cols x rows` matrix with `t[c][r] = self[r][c]`.
    pub fn t(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                res.data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        res
    }

    pub fn elem(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        let idx = self.index(row, col);
        self.data[idx] = val;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if row >= self.rows {
            panic!("row {} is out of bounds [rows={}]", row, self.rows);
        }
        if col >= self.cols {
            panic!("column {} is out of bounds [cols={}]", col, self.cols);
        }
        row * self.cols + col
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        ops::add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        ops::sub(self, rhs)
    }
}

/// Matrix product, same as [`ops::dot`].
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        ops::dot(self, rhs)
    }
}
