//! A growable rectangular table.
use std::fmt;

/// A two-dimensional table with a fixed number of columns and a growable number of rows.
///
/// Rows are stored contiguously in a single allocation. This backs the left and right Cayley
/// graphs of a semigroup, where the columns are the generators and a new row is added for every
/// discovered element.
#[derive(Clone, PartialEq, Eq)]
pub struct RecVec<T> {
    vec: Vec<T>,
    nr_cols: usize,
}

impl<T: Clone> RecVec<T> {
    /// Create an empty table with the given number of columns.
    pub fn new(nr_cols: usize) -> RecVec<T> {
        RecVec {
            vec: Vec::new(),
            nr_cols,
        }
    }

    /// The number of columns.
    pub fn nr_cols(&self) -> usize {
        self.nr_cols
    }

    /// The number of rows.
    pub fn nr_rows(&self) -> usize {
        if self.nr_cols == 0 {
            0
        } else {
            self.vec.len() / self.nr_cols
        }
    }

    /// Append a row filled with copies of a value.
    pub fn add_row(&mut self, value: T) {
        self.vec.resize(self.vec.len() + self.nr_cols, value);
    }

    /// The value in a given row and column.
    ///
    /// Panics when the cell is out of range.
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(col < self.nr_cols);
        &self.vec[row * self.nr_cols + col]
    }

    /// Overwrite the value in a given row and column.
    ///
    /// Panics when the cell is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(col < self.nr_cols);
        self.vec[row * self.nr_cols + col] = value;
    }

    /// A row as a slice.
    ///
    /// Panics when the row is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.nr_cols;
        &self.vec[start..start + self.nr_cols]
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.vec.chunks(self.nr_cols.max(1))
    }
}

impl<T: fmt::Debug + Clone> fmt::Debug for RecVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
