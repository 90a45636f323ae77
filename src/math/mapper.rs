//! Cell mappers for [`Matrix::apply`](crate::Matrix::apply) and
//! [`Matrix::from_fn`](crate::Matrix::from_fn).

use rand::Rng;

/// Uniform `[0, 1)` draws from the supplied generator.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> impl FnMut(usize, usize, f64) -> f64 + '_ {
    move |_, _, _| rng.gen::<f64>()
}

pub fn ones(_: usize, _: usize, _: f64) -> f64 {
    1.0
}

/// Constant fill.
pub fn value(v: f64) -> impl Fn(usize, usize, f64) -> f64 {
    move |_, _, _| v
}

pub fn square(_: usize, _: usize, v: f64) -> f64 {
    v * v
}
