//! Basic tests for matrix lifecycle and fill patterns

use dmatrix::{FillPattern, Matrix, MatrixConfig, MatrixError};

#[test]
fn test_matrix_creation() {
    let matrix = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    assert_eq!(matrix.rows(), 2);
    assert_eq!(matrix.cols(), 3);
    assert_eq!(matrix.len(), 6);
    assert!(!matrix.is_square());

    // Row-major layout
    assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(matrix.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(matrix[(1, 2)], 6.0);
}

#[test]
fn test_allocate_zero_is_empty() {
    let matrix = Matrix::<f64>::allocate(0, 0).unwrap();

    assert_eq!(matrix.shape(), (0, 0));
    assert!(matrix.is_empty());
    assert_eq!(matrix, Matrix::empty());
}

#[test]
fn test_allocate_overflow_fails() {
    let result = Matrix::<f64>::allocate(usize::MAX / 2, 3);
    assert!(matches!(result, Err(MatrixError::Allocation { .. })));
}

#[test]
fn test_every_pattern() {
    let config = MatrixConfig::seeded(2024).with_range(0.0, 1.0);

    let zeros = Matrix::<f64>::create_with(3, 3, FillPattern::Zeros, &config).unwrap();
    assert!(zeros.as_slice().iter().all(|&v| v == 0.0));

    let ones = Matrix::<f64>::create_with(3, 3, FillPattern::Ones, &config).unwrap();
    assert!(ones.as_slice().iter().all(|&v| v == 1.0));

    let identity = Matrix::<f64>::create_with(3, 3, FillPattern::Identity, &config).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(identity[(i, j)], if i == j { 1.0 } else { 0.0 });
        }
    }

    let random = Matrix::<f64>::create_with(3, 3, FillPattern::Random, &config).unwrap();
    assert!(random.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));

    let raising = Matrix::<f64>::create_with(3, 3, FillPattern::Raising, &config).unwrap();
    assert_eq!(raising[(0, 0)], 1.0);
    assert_eq!(raising[(2, 2)], 9.0);
}

#[test]
fn test_identity_non_square_is_an_error() {
    let err = Matrix::<f64>::create(3, 4, FillPattern::Identity).unwrap_err();
    assert_eq!(err, MatrixError::NotSquare { rows: 3, cols: 4 });
}

#[test]
fn test_fill_from_caller_buffer() {
    let mut matrix = Matrix::<f64>::allocate(2, 2).unwrap();
    matrix.fill_with_data(&[9.0, 8.0, 7.0, 6.0]).unwrap();
    assert_eq!(matrix.as_slice(), &[9.0, 8.0, 7.0, 6.0]);

    let err = matrix.fill_with_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DataLength {
            expected: 4,
            actual: 5
        }
    );
}

#[test]
fn test_free_is_idempotent() {
    let mut matrix = Matrix::<f64>::create(4, 4, FillPattern::Ones).unwrap();

    assert!(matrix.free());
    assert!(matrix.is_empty());
    assert_eq!(matrix.shape(), (0, 0));

    // Second free is a logged no-op
    assert!(!matrix.free());
    assert_eq!(matrix, Matrix::empty());
}

#[test]
fn test_clone_is_independent() {
    let original = Matrix::<i32>::create(2, 2, FillPattern::Raising).unwrap();
    let mut copy = original.clone();

    copy[(0, 0)] = 100;
    assert_eq!(original[(0, 0)], 1);
    assert_eq!(copy[(0, 0)], 100);
}

#[test]
fn test_display() {
    let matrix = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(format!("{}", matrix), "1.00 \t2.00 \t\n3.00 \t4.00 \t\n");
    assert_eq!(format!("{:.1}", matrix), "1.0 \t2.0 \t\n3.0 \t4.0 \t\n");
}
