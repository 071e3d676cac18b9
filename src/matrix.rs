//! Square-ish integer matrices with in-place transpose and random fill.

use std::fmt;
use std::mem;

use rand::Rng;

use crate::Error;

/// Upper bound (inclusive) for randomly generated cell values.
const MAX_CELL_VALUE: i64 = 10;

/// A row-major integer matrix with a diagnostic name.
///
/// Every row is allocated and equal-width from construction on, so readers
/// never observe a missing or ragged row. A matrix is either filled by
/// [`Matrix::random`] or written cell-by-cell by the workers of an in-flight
/// multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    name: String,
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix of zeros.
    pub fn zeroed(rows: usize, cols: usize, name: impl Into<String>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::ZeroDimension);
        }
        Ok(Self {
            name: name.into(),
            rows: vec![vec![0; cols]; rows],
        })
    }

    /// Creates a matrix from explicit rows.
    ///
    /// Rejects empty input and rows of unequal width, so every constructed
    /// matrix is rectangular.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<i64>>) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.len());
        if rows.is_empty() || width == 0 {
            return Err(Error::ZeroDimension);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow(i, width, row.len()));
            }
        }
        Ok(Self {
            name: name.into(),
            rows,
        })
    }

    /// Creates a `size` x `size` matrix with uniform random cells in `[0, 10]`.
    ///
    /// The caller supplies the generator, so a seeded rng gives reproducible
    /// matrices.
    pub fn random<R: Rng>(size: usize, name: impl Into<String>, rng: &mut R) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::ZeroDimension);
        }
        let rows = (0..size)
            .map(|_| (0..size).map(|_| rng.gen_range(0..=MAX_CELL_VALUE)).collect())
            .collect();
        Ok(Self {
            name: name.into(),
            rows,
        })
    }

    /// Transposes the matrix in place by swapping `(i, j)` with `(j, i)`.
    ///
    /// Only square matrices can be transposed without reallocation; a
    /// rectangular matrix yields [`Error::NotSquare`].
    pub fn transpose(&mut self) -> Result<(), Error> {
        let n = self.rows();
        if self.cols() != n {
            return Err(Error::NotSquare(n, self.cols()));
        }
        for i in 0..n {
            for j in (i + 1)..n {
                // Rows i and j are distinct here (i < j), so split to get
                // two mutable references into the grid.
                let (upper, lower) = self.rows.split_at_mut(j);
                mem::swap(&mut upper[i][j], &mut lower[0][i]);
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Borrows row `i` as a dot-product operand.
    pub fn row(&self, i: usize) -> &[i64] {
        &self.rows[i]
    }

    pub fn as_rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Enumerates every cell exactly once as `(row, col, &mut cell)`.
    ///
    /// This is what makes lock-free concurrent writes safe: each cell's
    /// exclusive reference is handed out once, so the tasks built from this
    /// iterator can never alias a write target.
    pub(crate) fn cells_mut<'m>(&'m mut self) -> impl Iterator<Item = (usize, usize, &'m mut i64)> {
        self.rows.iter_mut().enumerate().flat_map(|(r, row)| {
            row.iter_mut()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell))
        })
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}:", self.name)?;
        for row in &self.rows {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}
