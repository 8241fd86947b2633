//! Owning matrix container.
//!
//! Row-major storage over `i64` with the arithmetic and block primitives the
//! recursive engines need: element-wise add/sub, scalar scaling, naive
//! multiplication, zero-padding (`extend`), cropping (`slice`), quadrant
//! extraction (`block`) and 2x2 block reassembly (`splice`).

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatError;
use crate::kernel::Block;

/// Row-major matrix of `i64` values.
///
/// `Clone` is a deep copy; there is no shared storage. Out-of-range indexed
/// access panics, and arithmetic overflow panics under `overflow-checks`;
/// both are defined failures rather than silent corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create a zero-filled `rows x cols` matrix.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Deep-copy a raw 2-D buffer; dimensions are inferred from its extents.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, MatError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatError::RaggedBuffer {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols: n_cols,
            data,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element-wise sum; shapes must match.
    pub fn add(&self, other: &Self) -> Result<Self, MatError> {
        self.check_same_shape("add", other)?;
        Ok(self.zip_with(other, |x, y| x + y))
    }

    /// Element-wise difference; shapes must match.
    pub fn sub(&self, other: &Self) -> Result<Self, MatError> {
        self.check_same_shape("sub", other)?;
        Ok(self.zip_with(other, |x, y| x - y))
    }

    /// Every element scaled by `c`.
    #[must_use]
    pub fn scalar_mul(&self, c: i64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * c).collect(),
        }
    }

    /// Standard triple-loop product of an `m x k` by a `k x p` matrix.
    ///
    /// O(m·k·p); serves as the correctness oracle, the `naive` benchmark
    /// method, and the cutoff base case of the recursive engines.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatError> {
        if self.cols != other.rows {
            return Err(MatError::ShapeMismatch {
                op: "multiply",
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(self.multiply_unchecked(other))
    }

    /// Embed this square matrix in the top-left of a zero-filled
    /// `new_size x new_size` matrix.
    pub fn extend(&self, new_size: usize) -> Result<Self, MatError> {
        self.check_square()?;
        if new_size < self.rows {
            return Err(MatError::InvalidDimension {
                op: "extend",
                requested: new_size,
                available: self.rows,
            });
        }
        let mut out = Self::new(new_size, new_size);
        for i in 0..self.rows {
            let src = &self.data[i * self.cols..(i + 1) * self.cols];
            out.data[i * new_size..i * new_size + self.cols].copy_from_slice(src);
        }
        Ok(out)
    }

    /// The top-left `size x size` submatrix (inverse of [`Matrix::extend`]
    /// when the padded region was all zero).
    pub fn slice(&self, size: usize) -> Result<Self, MatError> {
        if size > self.rows || size > self.cols {
            return Err(MatError::InvalidDimension {
                op: "slice",
                requested: size,
                available: self.rows.min(self.cols),
            });
        }
        Ok(self.block_unchecked(0, 0, size))
    }

    /// An arbitrary `size x size` submatrix starting at `(row, col)`.
    pub fn block(&self, row: usize, col: usize, size: usize) -> Result<Self, MatError> {
        if row + size > self.rows || col + size > self.cols {
            return Err(MatError::InvalidDimension {
                op: "block",
                requested: size,
                available: self.rows.min(self.cols),
            });
        }
        Ok(self.block_unchecked(row, col, size))
    }

    /// Reassemble four equal-size square blocks into one matrix of double
    /// the side, in the 2x2 block layout (`c11` top-left, `c22` bottom-right).
    pub fn splice(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Result<Self, MatError> {
        let pivot = c11.rows;
        for quadrant in [c11, c12, c21, c22] {
            if quadrant.rows != pivot || quadrant.cols != pivot {
                return Err(MatError::ShapeMismatch {
                    op: "splice",
                    lhs_rows: pivot,
                    lhs_cols: pivot,
                    rhs_rows: quadrant.rows,
                    rhs_cols: quadrant.cols,
                });
            }
        }
        Ok(Self::splice_unchecked(c11, c12, c21, c22))
    }

    /// Convert to the raw buffer representation used by the flat engine.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.rows)
            .map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec())
            .collect()
    }

    fn zip_with(&self, other: &Self, f: impl Fn(i64, i64) -> i64) -> Self {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| f(x, y))
                .collect(),
        }
    }

    fn multiply_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.cols, other.rows);
        let mut out = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = acc;
            }
        }
        out
    }

    fn block_unchecked(&self, row: usize, col: usize, size: usize) -> Self {
        let mut out = Self::new(size, size);
        for i in 0..size {
            let src = &self.data[(row + i) * self.cols + col..(row + i) * self.cols + col + size];
            out.data[i * size..(i + 1) * size].copy_from_slice(src);
        }
        out
    }

    fn splice_unchecked(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        let pivot = c11.rows;
        let mut out = Self::new(pivot * 2, pivot * 2);
        for i in 0..pivot {
            for j in 0..pivot {
                out[(i, j)] = c11[(i, j)];
                out[(i, pivot + j)] = c12[(i, j)];
                out[(pivot + i, j)] = c21[(i, j)];
                out[(pivot + i, pivot + j)] = c22[(i, j)];
            }
        }
        out
    }

    fn check_same_shape(&self, op: &'static str, other: &Self) -> Result<(), MatError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatError::ShapeMismatch {
                op,
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<(), MatError> {
        if self.rows != self.cols {
            return Err(MatError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of range for {}x{}",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// Fixed-width columnar rendering, one row per line. Human inspection only;
/// not a parseable format.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>7}", self[(i, j)])?;
            }
        }
        Ok(())
    }
}

impl Block for Matrix {
    fn side(&self) -> usize {
        debug_assert_eq!(self.rows, self.cols);
        self.rows
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    fn from_quad(c11: i64, c12: i64, c21: i64, c22: i64) -> Self {
        Self {
            rows: 2,
            cols: 2,
            data: vec![c11, c12, c21, c22],
        }
    }

    fn plus(&self, other: &Self) -> Self {
        self.zip_with(other, |x, y| x + y)
    }

    fn minus(&self, other: &Self) -> Self {
        self.zip_with(other, |x, y| x - y)
    }

    fn quadrant(&self, row: usize, col: usize, size: usize) -> Self {
        self.block_unchecked(row, col, size)
    }

    fn assemble(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self {
        Self::splice_unchecked(c11, c12, c21, c22)
    }

    fn multiply_naive(&self, other: &Self) -> Self {
        self.multiply_unchecked(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_of(rows: &[&[i64]]) -> Matrix {
        let rows: Vec<Vec<i64>> = rows.iter().map(|r| r.to_vec()).collect();
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 0);
            }
        }
    }

    #[test]
    fn from_rows_infers_dimensions() {
        let m = matrix_of(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m[(1, 2)], 6);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let result = Matrix::from_rows(&[vec![1, 2], vec![3]]);
        assert!(matches!(
            result,
            Err(MatError::RaggedBuffer {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn clone_is_independent() {
        let mut a = matrix_of(&[&[1, 2], &[3, 4]]);
        let b = a.clone();
        a[(0, 0)] = 99;
        assert_eq!(b[(0, 0)], 1);
    }

    #[test]
    fn add_and_sub() {
        let a = matrix_of(&[&[1, 2], &[3, 4]]);
        let b = matrix_of(&[&[10, 20], &[30, 40]]);
        assert_eq!(a.add(&b).unwrap(), matrix_of(&[&[11, 22], &[33, 44]]));
        assert_eq!(b.sub(&a).unwrap(), matrix_of(&[&[9, 18], &[27, 36]]));
    }

    #[test]
    fn add_shape_mismatch() {
        let a = matrix_of(&[&[1, 2], &[3, 4]]);
        let b = Matrix::new(3, 3);
        assert!(matches!(
            a.add(&b),
            Err(MatError::ShapeMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn scalar_mul() {
        let a = matrix_of(&[&[1, -2], &[3, 0]]);
        assert_eq!(a.scalar_mul(-3), matrix_of(&[&[-3, 6], &[-9, 0]]));
    }

    #[test]
    fn multiply_2x2_golden() {
        let a = matrix_of(&[&[1, 2], &[3, 4]]);
        let b = matrix_of(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.multiply(&b).unwrap(), matrix_of(&[&[19, 22], &[43, 50]]));
    }

    #[test]
    fn multiply_rectangular() {
        let a = matrix_of(&[&[1, 2, 3]]);
        let b = matrix_of(&[&[4], &[5], &[6]]);
        assert_eq!(a.multiply(&b).unwrap(), matrix_of(&[&[32]]));
    }

    #[test]
    fn multiply_inner_dim_mismatch() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 2);
        assert!(matches!(
            a.multiply(&b),
            Err(MatError::ShapeMismatch { op: "multiply", .. })
        ));
    }

    #[test]
    fn extend_pads_with_zeros() {
        let m = matrix_of(&[&[1, 2], &[3, 4]]);
        let padded = m.extend(4).unwrap();
        assert_eq!((padded.rows(), padded.cols()), (4, 4));
        assert_eq!(padded[(1, 1)], 4);
        assert_eq!(padded[(2, 2)], 0);
        assert_eq!(padded[(0, 3)], 0);
    }

    #[test]
    fn extend_rejects_shrinking() {
        let m = Matrix::new(4, 4);
        assert!(matches!(
            m.extend(2),
            Err(MatError::InvalidDimension { op: "extend", .. })
        ));
    }

    #[test]
    fn extend_rejects_rectangular() {
        let m = Matrix::new(2, 3);
        assert!(matches!(m.extend(4), Err(MatError::NotSquare { .. })));
    }

    #[test]
    fn slice_undoes_extend() {
        let m = matrix_of(&[&[1, 2], &[3, 4]]);
        let round_trip = m.extend(7).unwrap().slice(2).unwrap();
        assert_eq!(round_trip, m);
    }

    #[test]
    fn block_extracts_quadrant() {
        let m = matrix_of(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
            &[13, 14, 15, 16],
        ]);
        assert_eq!(m.block(0, 2, 2).unwrap(), matrix_of(&[&[3, 4], &[7, 8]]));
        assert_eq!(
            m.block(2, 0, 2).unwrap(),
            matrix_of(&[&[9, 10], &[13, 14]])
        );
    }

    #[test]
    fn block_out_of_range() {
        let m = Matrix::new(4, 4);
        assert!(matches!(
            m.block(3, 3, 2),
            Err(MatError::InvalidDimension { op: "block", .. })
        ));
    }

    #[test]
    fn splice_reassembles_quadrants() {
        let m = matrix_of(&[
            &[1, 2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12],
            &[13, 14, 15, 16],
        ]);
        let c11 = m.block(0, 0, 2).unwrap();
        let c12 = m.block(0, 2, 2).unwrap();
        let c21 = m.block(2, 0, 2).unwrap();
        let c22 = m.block(2, 2, 2).unwrap();
        assert_eq!(Matrix::splice(&c11, &c12, &c21, &c22).unwrap(), m);
    }

    #[test]
    fn splice_rejects_unequal_blocks() {
        let small = Matrix::new(2, 2);
        let big = Matrix::new(3, 3);
        assert!(matches!(
            Matrix::splice(&small, &small, &small, &big),
            Err(MatError::ShapeMismatch { op: "splice", .. })
        ));
    }

    #[test]
    fn to_rows_round_trip() {
        let m = matrix_of(&[&[1, 2], &[3, 4]]);
        assert_eq!(Matrix::from_rows(&m.to_rows()).unwrap(), m);
    }

    #[test]
    fn display_fixed_width() {
        let m = matrix_of(&[&[1, -20], &[300, 4]]);
        let rendered = m.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "      1     -20");
        assert_eq!(lines[1], "    300       4");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let m = Matrix::new(2, 2);
        let _ = m[(2, 0)];
    }
}
