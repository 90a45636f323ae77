pub mod mapper;
pub mod matrix;
pub mod ops;

pub use matrix::Matrix;
pub use ops::{add, div, dot, mul, sub};
