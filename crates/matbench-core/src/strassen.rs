//! Top-level Strassen entry points: shape validation, padding, kernel
//! dispatch, and cropping.

use crate::error::MatError;
use crate::flat;
use crate::kernel::multiply_blocks;
use crate::matrix::Matrix;

/// Block size at and below which the cutoff variants fall back to naive
/// multiplication.
pub const DEFAULT_CUTOFF: usize = 64;

/// Multiply two square matrices of equal side with Strassen's algorithm.
///
/// `cutoff = None` recurses all the way to the closed-form 2x2 base case;
/// `cutoff = Some(limit)` switches to naive multiplication at `limit`,
/// trading asymptotic advantage for less recursion and allocation overhead
/// at small block sizes.
///
/// Sides that are not powers of two are zero-padded up to the next power of
/// two and the product is cropped back afterwards. The padded rows and
/// columns are all zero, so entries within the original bounds are
/// unaffected.
pub fn strassen(a: &Matrix, b: &Matrix, cutoff: Option<usize>) -> Result<Matrix, MatError> {
    check_operands("strassen", a.rows(), a.cols(), b.rows(), b.cols())?;
    let orig = a.rows();
    if orig == 0 {
        return Ok(Matrix::new(0, 0));
    }
    let dim = orig.next_power_of_two();
    if dim == orig {
        Ok(multiply_blocks(a, b, cutoff))
    } else {
        let padded_a = a.extend(dim)?;
        let padded_b = b.extend(dim)?;
        multiply_blocks(&padded_a, &padded_b, cutoff).slice(orig)
    }
}

/// Flat-buffer rendition of [`strassen`], operating on raw 2-D buffers.
///
/// Padding policy, base cases, and results are identical to the structured
/// variant; only the storage representation differs.
pub fn strassen_flat(
    a: Vec<Vec<i64>>,
    b: Vec<Vec<i64>>,
    cutoff: Option<usize>,
) -> Result<Vec<Vec<i64>>, MatError> {
    check_flat(&a)?;
    check_flat(&b)?;
    check_operands("strassen_flat", a.len(), a.len(), b.len(), b.len())?;
    let orig = a.len();
    if orig == 0 {
        return Ok(Vec::new());
    }
    let dim = orig.next_power_of_two();
    Ok(if dim == orig {
        multiply_blocks(&a, &b, cutoff)
    } else {
        let padded_a = flat::extend(&a, dim);
        let padded_b = flat::extend(&b, dim);
        flat::shrink(&multiply_blocks(&padded_a, &padded_b, cutoff), orig)
    })
}

fn check_operands(
    op: &'static str,
    a_rows: usize,
    a_cols: usize,
    b_rows: usize,
    b_cols: usize,
) -> Result<(), MatError> {
    if a_rows != a_cols {
        return Err(MatError::NotSquare {
            rows: a_rows,
            cols: a_cols,
        });
    }
    if b_rows != b_cols {
        return Err(MatError::NotSquare {
            rows: b_rows,
            cols: b_cols,
        });
    }
    if a_rows != b_rows {
        return Err(MatError::ShapeMismatch {
            op,
            lhs_rows: a_rows,
            lhs_cols: a_cols,
            rhs_rows: b_rows,
            rhs_cols: b_cols,
        });
    }
    Ok(())
}

fn check_flat(m: &[Vec<i64>]) -> Result<(), MatError> {
    let side = m.len();
    let width = m.first().map_or(0, Vec::len);
    for (i, row) in m.iter().enumerate() {
        if row.len() != width {
            return Err(MatError::RaggedBuffer {
                row: i,
                expected: width,
                found: row.len(),
            });
        }
    }
    if side != 0 && side != width {
        return Err(MatError::NotSquare {
            rows: side,
            cols: width,
        });
    }
    Ok(())
}
