//! Boolean matrices.
use std::fmt;

use crate::element::Element;

/// A square matrix with boolean entries.
///
/// Boolean matrices of dimension n form a monoid under the usual matrix product with logical or
/// as addition and logical and as multiplication; equivalently, they are binary relations on
/// {0, ..., n-1} under relation composition. The degree of a boolean matrix is its dimension.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BooleanMat {
    // Row-major, dim * dim entries
    entries: Box<[bool]>,
    dim: usize,
}

impl BooleanMat {
    /// Create a boolean matrix from its rows.
    ///
    /// Returns None if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Option<BooleanMat> {
        let dim = rows.len();
        if rows.iter().any(|row| row.len() != dim) {
            return None;
        }
        let entries: Vec<bool> = rows.into_iter().flatten().collect();
        Some(BooleanMat {
            entries: entries.into_boxed_slice(),
            dim,
        })
    }

    /// The entry in a given row and column.
    ///
    /// Panics when either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.dim && col < self.dim);
        self.entries[row * self.dim + col]
    }

    /// The rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.entries.chunks(self.dim.max(1))
    }
}

impl Element for BooleanMat {
    fn degree(&self) -> usize {
        self.dim
    }

    fn identity(&self) -> Option<BooleanMat> {
        let dim = self.dim;
        let mut entries = vec![false; dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = true;
        }
        Some(BooleanMat {
            entries: entries.into_boxed_slice(),
            dim,
        })
    }

    fn redefine(&mut self, a: &BooleanMat, b: &BooleanMat) {
        debug_assert_eq!(a.dim, b.dim);
        let dim = a.dim;
        if self.dim != dim {
            self.entries = vec![false; dim * dim].into_boxed_slice();
            self.dim = dim;
        }
        for i in 0..dim {
            for j in 0..dim {
                let mut entry = false;
                for k in 0..dim {
                    if a.entries[i * dim + k] && b.entries[k * dim + j] {
                        entry = true;
                        break;
                    }
                }
                self.entries[i * dim + j] = entry;
            }
        }
    }
}

impl fmt::Display for BooleanMat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("BooleanMat([")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            let digits: Vec<u8> = row.iter().map(|&x| x as u8).collect();
            write!(f, "{:?}", digits)?;
        }
        f.write_str("])")
    }
}

impl fmt::Debug for BooleanMat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: Vec<Vec<u8>>) -> BooleanMat {
        BooleanMat::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(|x| x != 0).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn from_rows_rejects_non_square() {
        assert!(BooleanMat::from_rows(vec![vec![true, false], vec![true]]).is_none());
        assert!(BooleanMat::from_rows(vec![vec![true, false]]).is_none());
    }

    #[test]
    fn fmt() {
        let m = mat(vec![vec![1, 1], vec![0, 1]]);
        assert_eq!(format!("{}", m), "BooleanMat([[1, 1], [0, 1]])");
    }

    #[test]
    fn product_is_relation_composition() {
        let a = mat(vec![vec![1, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
        let b = mat(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 0, 0]]);
        let expected = mat(vec![vec![0, 1, 1], vec![1, 0, 0], vec![0, 0, 0]]);
        assert_eq!(BooleanMat::product(&a, &b), expected);
    }

    #[test]
    fn identity_is_neutral() {
        let m = mat(vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 1, 0]]);
        let id = m.identity().unwrap();
        assert_eq!(BooleanMat::product(&id, &m), m);
        assert_eq!(BooleanMat::product(&m, &id), m);
    }
}
