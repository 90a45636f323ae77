// Tests for the dense matrix container: construction, cell access,
// in-place transforms and transpose.

use ffnet::math::mapper;
use ffnet::Matrix;

fn sample_3x2() -> Matrix {
    Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
}

#[test]
fn zeros_has_requested_dims() {
    let m = Matrix::zeros(3, 3);
    assert_eq!(m.dims(), (3, 3));
    assert_eq!(m.size(), 9);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn from_fn_fills_every_cell() {
    let m = Matrix::from_fn(3, 3, mapper::ones);
    assert!(m.as_slice().iter().all(|&v| v == 1.0));

    let m = Matrix::from_fn(2, 2, mapper::value(7.5));
    assert_eq!(m.values(), vec![7.5; 4]);
}

#[test]
#[should_panic(expected = "need exactly 6 values")]
fn from_vec_rejects_wrong_value_count() {
    Matrix::from_vec(2, 3, vec![1.0, 2.0]);
}

#[test]
fn clone_shares_no_storage() {
    let m = sample_3x2();
    let mut c = m.clone();
    assert!(m.equals(&c));

    c.set(0, 0, 100.0);
    assert_eq!(m.elem(0, 0), 1.0);
    assert_eq!(c.elem(0, 0), 100.0);
}

#[test]
fn equals_checks_values_and_dims() {
    let m = sample_3x2();
    assert!(m.equals(&m));

    let mut ones = m.clone();
    ones.apply(mapper::ones);
    assert!(!m.equals(&ones));

    // same values, different shape
    assert!(!m.equals(&m.t()));
    assert!(!m.equals(&Matrix::from_vec(2, 3, m.values())));
}

#[test]
fn apply_mutates_and_reset_zeroes() {
    let mut m = sample_3x2();
    m.apply(mapper::square);
    assert_eq!(m.values(), vec![1.0, 4.0, 9.0, 16.0, 25.0, 36.0]);

    m.reset();
    assert!(m.equals(&Matrix::zeros(3, 2)));
}

#[test]
fn scale_multiplies_every_cell() {
    let mut m = Matrix::from_vec(3, 3, vec![1.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    let want = Matrix::from_vec(3, 3, vec![-1.0, 0.0, -2.0, 0.0, -1.0, 0.0, 0.0, 0.0, -1.0]);
    m.scale(-1.0);
    assert_eq!(m, want);
}

#[test]
fn transpose_square() {
    let m = Matrix::from_vec(3, 3, vec![1.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    let want = Matrix::from_vec(3, 3, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 1.0]);
    assert_eq!(m.t(), want);
}

#[test]
fn transpose_non_square() {
    let want = Matrix::from_vec(2, 3, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    assert_eq!(sample_3x2().t(), want);
}

#[test]
fn transpose_round_trips() {
    for (rows, cols) in [(1, 1), (1, 4), (4, 1), (3, 2), (5, 7)] {
        let m = Matrix::from_fn(rows, cols, |r, c, _| (r * cols + c) as f64 * 0.5 - 3.0);
        assert!(m.t().t().equals(&m), "round trip failed for {rows}x{cols}");
    }
}

#[test]
fn set_then_elem() {
    let mut m = sample_3x2();
    m.set(2, 1, 100.0);
    assert_eq!(m.elem(2, 1), 100.0);
    assert_eq!(m.values()[5], 100.0);
}

#[test]
#[should_panic(expected = "row 3 is out of bounds")]
fn elem_out_of_range_row_panics() {
    sample_3x2().elem(3, 0);
}

#[test]
#[should_panic(expected = "column 2 is out of bounds")]
fn set_out_of_range_col_panics() {
    sample_3x2().set(0, 2, 1.0);
}

#[test]
fn values_is_an_independent_copy() {
    let m = sample_3x2();
    let mut v = m.values();
    v[0] = -1.0;
    assert_eq!(m.elem(0, 0), 1.0);
}
