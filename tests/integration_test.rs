use matrix_pool::{Error, Matrix, available_workers, multiply, queue_tasks, run_workers};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Straightforward triple-loop product of `a` and the *untransposed* `b`,
/// used as the reference the pool has to agree with.
fn serial_product(a: &Matrix, b: &Matrix) -> Vec<Vec<i64>> {
    let mut out = vec![vec![0; b.cols()]; a.rows()];
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            for k in 0..a.cols() {
                out[i][j] += a.row(i)[k] * b.row(k)[j];
            }
        }
    }
    out
}

#[test]
fn transpose_swaps_across_the_diagonal() {
    let mut m = Matrix::from_rows("m", vec![vec![1, 2], vec![3, 4]]).unwrap();
    m.transpose().unwrap();
    assert_eq!(m.as_rows(), &[vec![1, 3], vec![2, 4]]);
}

#[test]
fn transpose_round_trip_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let original = Matrix::random(7, "m", &mut rng).unwrap();
    let mut m = original.clone();
    m.transpose().unwrap();
    m.transpose().unwrap();
    assert_eq!(m, original);
}

#[test]
fn transpose_rejects_rectangular_matrices() {
    let mut m = Matrix::from_rows("m", vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert!(matches!(m.transpose(), Err(Error::NotSquare(2, 3))));
}

#[test]
fn known_2x2_product() {
    let lhs = Matrix::from_rows("a", vec![vec![1, 2], vec![3, 4]]).unwrap();
    let mut rhs = Matrix::from_rows("b", vec![vec![5, 6], vec![7, 8]]).unwrap();
    rhs.transpose().unwrap();

    let product = multiply(&lhs, &rhs, "x", 2).unwrap();
    assert_eq!(product.as_rows(), &[vec![17, 23], vec![39, 53]]);
}

#[test]
fn single_cell_product() {
    let lhs = Matrix::from_rows("a", vec![vec![3]]).unwrap();
    let rhs = Matrix::from_rows("b", vec![vec![4]]).unwrap();

    let product = multiply(&lhs, &rhs, "x", 1).unwrap();
    assert_eq!(product.as_rows(), &[vec![12]]);
}

#[test]
fn zero_dimension_is_rejected() {
    assert!(matches!(
        Matrix::zeroed(0, 3, "m"),
        Err(Error::ZeroDimension)
    ));
    assert!(matches!(
        Matrix::from_rows("m", vec![]),
        Err(Error::ZeroDimension)
    ));
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Matrix::random(0, "m", &mut rng),
        Err(Error::ZeroDimension)
    ));
}

#[test]
fn ragged_rows_are_rejected() {
    let result = Matrix::from_rows("m", vec![vec![1, 2], vec![3]]);
    assert!(matches!(result, Err(Error::RaggedRow(1, 2, 1))));
}

#[test]
fn mismatched_operand_widths_are_rejected() {
    let lhs = Matrix::from_rows("a", vec![vec![1, 2], vec![3, 4]]).unwrap();
    let rhs = Matrix::from_rows("b", vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();

    let result = multiply(&lhs, &rhs, "x", 2);
    assert!(matches!(result, Err(Error::DimensionMismatch(2, 2, 2, 3))));
}

#[test]
fn empty_pool_is_rejected_before_any_work() {
    let lhs = Matrix::from_rows("a", vec![vec![1]]).unwrap();
    let rhs = Matrix::from_rows("b", vec![vec![1]]).unwrap();
    assert!(matches!(multiply(&lhs, &rhs, "x", 0), Err(Error::NoWorkers)));
}

#[test]
fn product_is_invariant_under_pool_size() {
    let mut rng = StdRng::seed_from_u64(42);
    let lhs = Matrix::random(8, "a", &mut rng).unwrap();
    let mut rhs = Matrix::random(8, "b", &mut rng).unwrap();
    rhs.transpose().unwrap();

    let serial = multiply(&lhs, &rhs, "x", 1).unwrap();
    let small_pool = multiply(&lhs, &rhs, "x", 4).unwrap();
    let full_pool = multiply(&lhs, &rhs, "x", available_workers()).unwrap();

    assert_eq!(serial.as_rows(), small_pool.as_rows());
    assert_eq!(serial.as_rows(), full_pool.as_rows());
}

#[test]
fn pool_agrees_with_serial_reference() {
    let mut rng = StdRng::seed_from_u64(1234);
    let lhs = Matrix::random(6, "a", &mut rng).unwrap();
    let rhs = Matrix::random(6, "b", &mut rng).unwrap();

    let mut transposed = rhs.clone();
    transposed.transpose().unwrap();

    let product = multiply(&lhs, &transposed, "x", 3).unwrap();
    assert_eq!(product.as_rows(), serial_product(&lhs, &rhs));
}

#[test]
fn every_cell_is_written() {
    // All-ones operands: every product cell must leave its zero-initialized
    // state and end up at exactly the inner dimension.
    let ones = Matrix::from_rows("a", vec![vec![1; 5]; 5]).unwrap();

    let product = multiply(&ones, &ones, "x", 4).unwrap();
    for i in 0..5 {
        assert_eq!(product.row(i), &[5; 5]);
    }
}

#[test]
fn queue_is_fully_populated_and_closed_before_draining() {
    let lhs = Matrix::from_rows("a", vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
    let rhs = lhs.clone();
    let mut dest = Matrix::zeroed(3, 3, "x").unwrap();

    let queue = queue_tasks(&lhs, &rhs, &mut dest);
    assert_eq!(queue.len(), 9);

    // A single worker drains the closed queue to completion.
    run_workers(queue, 1).unwrap();
    assert_eq!(
        dest.as_rows(),
        &[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
    );
}

#[test]
fn rectangular_intermediates_multiply_correctly() {
    // A 2x3 left operand against a pre-transposed 2x3 right operand (the
    // logical 3x2 matrix) yields a 2x2 product over the true vector length.
    let lhs = Matrix::from_rows("a", vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let rhs = Matrix::from_rows("b", vec![vec![1, 0, 1], vec![0, 1, 0]]).unwrap();

    let product = multiply(&lhs, &rhs, "x", 2).unwrap();
    assert_eq!(product.as_rows(), &[vec![4, 2], vec![10, 5]]);
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut first = StdRng::seed_from_u64(99);
    let mut second = StdRng::seed_from_u64(99);

    let a = Matrix::random(5, "a", &mut first).unwrap();
    let b = Matrix::random(5, "a", &mut second).unwrap();
    assert_eq!(a, b);
}
