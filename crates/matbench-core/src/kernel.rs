//! Shared block-recursive Strassen kernel.
//!
//! The recursion and arithmetic formulas are written once, generic over the
//! minimal capability set both storage representations provide. `Matrix` and
//! raw `Vec<Vec<i64>>` buffers plug in as interchangeable backings, which
//! keeps the two benchmarked engines in lock-step by construction.

/// Capability set a storage type needs to participate in the recursion.
///
/// Implementations may assume, and the kernel guarantees, that the operands
/// of every call are square, power-of-two sized and equally sized; the
/// fallible shape checks live at the public entry points in [`crate::strassen`].
pub(crate) trait Block: Sized + Send + Sync {
    /// Side length.
    fn side(&self) -> usize;

    /// Element at `(row, col)`.
    fn at(&self, row: usize, col: usize) -> i64;

    /// A 2x2 block from four scalars in row-major order.
    fn from_quad(c11: i64, c12: i64, c21: i64, c22: i64) -> Self;

    /// Element-wise sum.
    fn plus(&self, other: &Self) -> Self;

    /// Element-wise difference.
    fn minus(&self, other: &Self) -> Self;

    /// The `size x size` submatrix starting at `(row, col)`.
    fn quadrant(&self, row: usize, col: usize, size: usize) -> Self;

    /// Reassemble four equal quadrants into the 2x2 block layout.
    fn assemble(c11: &Self, c12: &Self, c21: &Self, c22: &Self) -> Self;

    /// Naive triple-loop product.
    fn multiply_naive(&self, other: &Self) -> Self;
}

/// Smallest half-block size worth fanning the seven products out to rayon.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_PIVOT: usize = 128;

/// Multiply two power-of-two sized blocks.
///
/// `cutoff = None` recurses to the closed-form 2x2 base case; `Some(limit)`
/// switches to naive multiplication once the block side is at or below
/// `limit`. Seven recursive products and eighteen half-size additions per
/// level, the classic O(n^2.807) scheme.
pub(crate) fn multiply_blocks<B: Block>(a: &B, b: &B, cutoff: Option<usize>) -> B {
    let size = a.side();
    debug_assert_eq!(size, b.side());
    debug_assert!(size.is_power_of_two());

    match cutoff {
        Some(limit) if size <= limit.max(1) => return a.multiply_naive(b),
        None if size == 1 => return a.multiply_naive(b),
        None if size == 2 => return strassen_2x2(a, b),
        _ => {}
    }

    let pivot = size >> 1;

    let a11 = a.quadrant(0, 0, pivot);
    let a12 = a.quadrant(0, pivot, pivot);
    let a21 = a.quadrant(pivot, 0, pivot);
    let a22 = a.quadrant(pivot, pivot, pivot);

    let b11 = b.quadrant(0, 0, pivot);
    let b12 = b.quadrant(0, pivot, pivot);
    let b21 = b.quadrant(pivot, 0, pivot);
    let b22 = b.quadrant(pivot, pivot, pivot);

    let s1 = a21.plus(&a22);
    let s2 = s1.minus(&a11);
    let s3 = a11.minus(&a21);
    let s4 = a12.minus(&s2);
    let s5 = b12.minus(&b11);
    let s6 = b22.minus(&s5);
    let s7 = b22.minus(&b12);
    let s8 = s6.minus(&b21);

    #[cfg(not(feature = "parallel"))]
    let (p1, p2, p3, p4, p5, p6, p7) = (
        multiply_blocks(&s2, &s6, cutoff),
        multiply_blocks(&a11, &b11, cutoff),
        multiply_blocks(&a12, &b21, cutoff),
        multiply_blocks(&s3, &s7, cutoff),
        multiply_blocks(&s1, &s5, cutoff),
        multiply_blocks(&s4, &b22, cutoff),
        multiply_blocks(&a22, &s8, cutoff),
    );

    // The seven products are mutually independent, so joining them is safe:
    // every block below this level is exclusively owned by its branch.
    #[cfg(feature = "parallel")]
    let (p1, p2, p3, p4, p5, p6, p7) = if pivot >= PARALLEL_MIN_PIVOT {
        let ((p1, p2), ((p3, p4), (p5, (p6, p7)))) = rayon::join(
            || {
                rayon::join(
                    || multiply_blocks(&s2, &s6, cutoff),
                    || multiply_blocks(&a11, &b11, cutoff),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || multiply_blocks(&a12, &b21, cutoff),
                            || multiply_blocks(&s3, &s7, cutoff),
                        )
                    },
                    || {
                        rayon::join(
                            || multiply_blocks(&s1, &s5, cutoff),
                            || {
                                rayon::join(
                                    || multiply_blocks(&s4, &b22, cutoff),
                                    || multiply_blocks(&a22, &s8, cutoff),
                                )
                            },
                        )
                    },
                )
            },
        );
        (p1, p2, p3, p4, p5, p6, p7)
    } else {
        (
            multiply_blocks(&s2, &s6, cutoff),
            multiply_blocks(&a11, &b11, cutoff),
            multiply_blocks(&a12, &b21, cutoff),
            multiply_blocks(&s3, &s7, cutoff),
            multiply_blocks(&s1, &s5, cutoff),
            multiply_blocks(&s4, &b22, cutoff),
            multiply_blocks(&a22, &s8, cutoff),
        )
    };

    let t1 = p1.plus(&p2);
    let t2 = t1.plus(&p4);

    let c11 = p2.plus(&p3);
    let c12 = t1.plus(&p5).plus(&p6);
    let c21 = t2.minus(&p7);
    let c22 = t2.plus(&p5);

    B::assemble(&c11, &c12, &c21, &c22)
}

/// Closed-form 2x2 base case: 7 scalar products, 18 additions.
fn strassen_2x2<B: Block>(a: &B, b: &B) -> B {
    let s1 = a.at(1, 0) + a.at(1, 1);
    let s2 = s1 - a.at(0, 0);
    let s3 = a.at(0, 0) - a.at(1, 0);
    let s4 = a.at(0, 1) - s2;
    let s5 = b.at(0, 1) - b.at(0, 0);
    let s6 = b.at(1, 1) - s5;
    let s7 = b.at(1, 1) - b.at(0, 1);
    let s8 = s6 - b.at(1, 0);

    let p1 = s2 * s6;
    let p2 = a.at(0, 0) * b.at(0, 0);
    let p3 = a.at(0, 1) * b.at(1, 0);
    let p4 = s3 * s7;
    let p5 = s1 * s5;
    let p6 = s4 * b.at(1, 1);
    let p7 = a.at(1, 1) * s8;

    let t1 = p1 + p2;
    let t2 = t1 + p4;

    B::from_quad(p2 + p3, t1 + p5 + p6, t2 - p7, t2 + p5)
}
