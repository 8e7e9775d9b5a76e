//! Arithmetic, multiplication and transposition tests, including
//! property-based checks of the algebraic identities

use dmatrix::{FillPattern, Matrix, MatrixError};
use proptest::prelude::*;

/// Integer-valued entries keep float arithmetic exact
fn matrix_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        let len = rows * cols;
        (
            prop::collection::vec(-1000i32..1000, len),
            prop::collection::vec(-1000i32..1000, len),
        )
            .prop_map(move |(a, b)| {
                let to_matrix = |values: Vec<i32>| {
                    Matrix::from_vec(rows, cols, values.into_iter().map(f64::from).collect())
                        .unwrap()
                };
                (to_matrix(a), to_matrix(b))
            })
    })
}

/// Entries are bounded so cofactor sums stay exactly representable
fn square_matrix(max_n: usize, bound: i32) -> impl Strategy<Value = Matrix<f64>> {
    (1usize..max_n).prop_flat_map(move |n| {
        prop::collection::vec(-bound..bound, n * n).prop_map(move |values| {
            Matrix::from_vec(n, n, values.into_iter().map(f64::from).collect()).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_sum_is_elementwise((a, b) in matrix_pair()) {
        let sum = a.sum(&b).unwrap();
        for ((&s, &x), &y) in sum.as_slice().iter().zip(a.as_slice()).zip(b.as_slice()) {
            prop_assert_eq!(s, x + y);
        }
    }

    #[test]
    fn prop_subtract_undoes_sum((a, b) in matrix_pair()) {
        let roundtrip = a.sum(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(roundtrip, a);
    }

    #[test]
    fn prop_identity_is_neutral(a in square_matrix(6, 1000)) {
        let identity = Matrix::<f64>::identity(a.rows()).unwrap();
        prop_assert_eq!(identity.multiply(&a).unwrap(), a.clone());
        prop_assert_eq!(a.multiply(&identity).unwrap(), a);
    }

    #[test]
    fn prop_product_shape(rows in 1usize..6, inner in 1usize..6, cols in 1usize..6) {
        let a = Matrix::<f64>::create(rows, inner, FillPattern::Ones).unwrap();
        let b = Matrix::<f64>::create(inner, cols, FillPattern::Ones).unwrap();

        let c = a.multiply(&b).unwrap();
        prop_assert_eq!(c.shape(), (rows, cols));
        // Every entry of a product of ones counts the inner dimension
        prop_assert!(c.as_slice().iter().all(|&v| v == inner as f64));
    }

    #[test]
    fn prop_double_transpose((a, _b) in matrix_pair()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn prop_transpose_determinant(a in square_matrix(5, 100)) {
        prop_assert_eq!(a.transpose().determinant().unwrap(), a.determinant().unwrap());
    }
}

#[test]
fn test_three_by_four_times_four_by_three() {
    let a = Matrix::from_vec(
        3,
        4,
        vec![2.0, 2.0, 2.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
    )
    .unwrap();
    let b = Matrix::from_vec(
        4,
        3,
        vec![3.0, 3.0, 3.0, 3.0, 3.0, 12.0, 3.0, 3.0, 3.0, 3.0, 3.0, 30.0],
    )
    .unwrap();

    let c = a.multiply(&b).unwrap();

    // Recompute every entry from the dot-product rule
    for i in 0..3 {
        for j in 0..3 {
            let expected: f64 = (0..4).map(|k| a[(i, k)] * b[(k, j)]).sum();
            assert_eq!(c[(i, j)], expected);
        }
    }
    assert_eq!(c.row(0), &[21.0, 21.0, 66.0]);
    assert_eq!(c.row(2), &[24.0, 24.0, 96.0]);
}

#[test]
fn test_mismatched_shapes() {
    let a = Matrix::<f64>::zeros(2, 3).unwrap();
    let b = Matrix::<f64>::zeros(3, 3).unwrap();

    assert!(matches!(
        a.sum(&b),
        Err(MatrixError::DimensionMismatch { op: "sum", .. })
    ));
    assert!(matches!(
        a.subtract(&b),
        Err(MatrixError::DimensionMismatch { op: "subtract", .. })
    ));
    assert!(matches!(
        b.multiply(&a),
        Err(MatrixError::DimensionMismatch { op: "multiply", .. })
    ));
    assert!(a.multiply(&b).is_ok());
}

#[test]
fn test_scalar_multiply() {
    let a = Matrix::<f64>::create(2, 3, FillPattern::Raising).unwrap();
    let scaled = a.scalar_multiply(-2.0);

    assert_eq!(scaled.shape(), (2, 3));
    assert_eq!(scaled.as_slice(), &[-2.0, -4.0, -6.0, -8.0, -10.0, -12.0]);
    assert_eq!(&a * -2.0, scaled);
}
