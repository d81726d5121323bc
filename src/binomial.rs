//! Lookup table of binomial coefficients (Pascal's triangle).
//!
//! Row `k` holds `C(k, 0) ..= C(k, k)`. Rows are built with the additive recurrence
//! `C(k+1, j) = C(k, j-1) + C(k, j)`, so no factorials are ever formed.
//! The last row weights the Bernstein polynomials of a curve of order `r`,
//! the second to last row weights its derivative.
use tinyvec::TinyVec;

use crate::error::CurveError;

/// Highest order whose coefficients all fit into a `u64`
pub const MAX_ORDER: usize = 67;

/// Rows up to this length are stored inline without a heap allocation.
pub const INLINE_ROW_LEN: usize = 16;

/// One row of Pascal's triangle
pub type BinomialRow = TinyVec<[u64; INLINE_ROW_LEN]>;

/// Binomial coefficients for all rows `0..=order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinomialTable {
    rows: Vec<BinomialRow>,
}

impl BinomialTable {
    /// Build rows `0..=order`.
    /// Fails with `CoefficientOverflow` once a coefficient no longer fits into a `u64` (order > `MAX_ORDER`).
    pub fn new(order: usize) -> Result<Self, CurveError> {
        if order > MAX_ORDER {
            return Err(CurveError::CoefficientOverflow { order });
        }
        let mut rows: Vec<BinomialRow> = Vec::with_capacity(order + 1);

        let mut first = BinomialRow::new();
        first.push(1);
        rows.push(first);

        for k in 0..order {
            let prev = &rows[k];
            let mut next = BinomialRow::with_capacity(k + 2);
            // both ends of every row are 1, the interior sums its two parents
            next.push(1);
            for j in 1..=k {
                let c = prev[j - 1]
                    .checked_add(prev[j])
                    .ok_or(CurveError::CoefficientOverflow { order })?;
                next.push(c);
            }
            next.push(1);
            rows.push(next);
        }

        Ok(BinomialTable { rows })
    }

    /// Order of the last row
    pub fn order(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn row(&self, k: usize) -> Option<&[u64]> {
        self.rows.get(k).map(|row| row.as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Row `r`, the weights of the curve itself
    pub fn curve_row(&self) -> &[u64] {
        self.rows[self.order()].as_slice()
    }

    /// Row `r - 1`, the weights of the derivative. None for order 0.
    pub fn tangent_row(&self) -> Option<&[u64]> {
        self.order().checked_sub(1).and_then(|k| self.row(k))
    }
}
