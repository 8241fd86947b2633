//! Cross-engine agreement and block-manipulation round trips.
//!
//! Every multiplication strategy must produce results element-wise identical
//! to the naive oracle, for powers of two and everything in between.

use matbench_core::{strassen, strassen_flat, MatError, Matrix, DEFAULT_CUTOFF};
use matbench_harness::random_matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn matrix_of(rows: &[&[i64]]) -> Matrix {
    let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
    Matrix::from_rows(&rows).unwrap()
}

// ---------------------------------------------------------------------------
// Golden scenario
// ---------------------------------------------------------------------------

#[test]
fn golden_2x2_all_engines() {
    let a = matrix_of(&[&[1, 2], &[3, 4]]);
    let b = matrix_of(&[&[5, 6], &[7, 8]]);
    let expected = matrix_of(&[&[19, 22], &[43, 50]]);

    assert_eq!(a.multiply(&b).unwrap(), expected);
    assert_eq!(strassen(&a, &b, None).unwrap(), expected);
    assert_eq!(strassen(&a, &b, Some(DEFAULT_CUTOFF)).unwrap(), expected);

    let flat = strassen_flat(a.to_rows(), b.to_rows(), None).unwrap();
    assert_eq!(flat, vec![vec![19, 22], vec![43, 50]]);
    let flat_cut = strassen_flat(a.to_rows(), b.to_rows(), Some(DEFAULT_CUTOFF)).unwrap();
    assert_eq!(flat_cut, vec![vec![19, 22], vec![43, 50]]);
}

// ---------------------------------------------------------------------------
// Agreement across sizes, including non-powers of two and n = 1
// ---------------------------------------------------------------------------

#[test]
fn all_engines_agree_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0xA6EE);
    for n in [1usize, 2, 3, 4, 5, 6, 7, 8, 9, 12, 16, 17, 31, 32, 33, 65] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);
        let oracle = a.multiply(&b).unwrap();

        assert_eq!(strassen(&a, &b, None).unwrap(), oracle, "pure, n={n}");
        assert_eq!(
            strassen(&a, &b, Some(DEFAULT_CUTOFF)).unwrap(),
            oracle,
            "cutoff, n={n}"
        );

        let flat = strassen_flat(a.to_rows(), b.to_rows(), None).unwrap();
        assert_eq!(Matrix::from_rows(&flat).unwrap(), oracle, "flat, n={n}");
        let flat_cut =
            strassen_flat(a.to_rows(), b.to_rows(), Some(DEFAULT_CUTOFF)).unwrap();
        assert_eq!(
            Matrix::from_rows(&flat_cut).unwrap(),
            oracle,
            "cutoff-flat, n={n}"
        );
    }
}

#[test]
fn product_keeps_the_original_side_after_padding() {
    let mut rng = StdRng::seed_from_u64(0xBEE);
    for n in [3usize, 5, 6, 7, 9, 17] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);
        let product = strassen(&a, &b, None).unwrap();
        assert_eq!((product.rows(), product.cols()), (n, n));
    }
}

// ---------------------------------------------------------------------------
// Block-manipulation round trips
// ---------------------------------------------------------------------------

#[test]
fn pad_then_crop_round_trip() {
    let mut rng = StdRng::seed_from_u64(17);
    let m = random_matrix(5, &mut rng);
    for target in [5usize, 6, 8, 13, 16] {
        assert_eq!(m.extend(target).unwrap().slice(5).unwrap(), m, "target {target}");
    }
}

#[test]
fn split_then_reassemble_round_trip() {
    let mut rng = StdRng::seed_from_u64(18);
    for half in [1usize, 2, 3, 4] {
        let m = random_matrix(2 * half, &mut rng);
        let c11 = m.block(0, 0, half).unwrap();
        let c12 = m.block(0, half, half).unwrap();
        let c21 = m.block(half, 0, half).unwrap();
        let c22 = m.block(half, half, half).unwrap();
        assert_eq!(Matrix::splice(&c11, &c12, &c21, &c22).unwrap(), m);
    }
}

// ---------------------------------------------------------------------------
// Shape failures
// ---------------------------------------------------------------------------

#[test]
fn adding_2x2_to_3x3_is_a_shape_mismatch() {
    let a = Matrix::new(2, 2);
    let b = Matrix::new(3, 3);
    assert!(matches!(
        a.add(&b),
        Err(MatError::ShapeMismatch {
            op: "add",
            lhs_rows: 2,
            lhs_cols: 2,
            rhs_rows: 3,
            rhs_cols: 3,
        })
    ));
}

#[test]
fn strassen_rejects_mismatched_sides() {
    let a = Matrix::new(4, 4);
    let b = Matrix::new(8, 8);
    assert!(matches!(
        strassen(&a, &b, None),
        Err(MatError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        strassen_flat(a.to_rows(), b.to_rows(), None),
        Err(MatError::ShapeMismatch { .. })
    ));
}
