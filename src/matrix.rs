//! Dense dynamic-programming table produced by the distance engine.
//!
//! A `DistanceMatrix` for sequences of lengths `n` and `m` has `n + 1` rows
//! and `m + 1` columns; cell `(i, j)` holds the minimum cost of turning the
//! first `i` code points of the first sequence into the first `j` code points
//! of the second. Cells are stored row-major in one allocation.

use std::fmt::Write as _;
use std::ops::Index;

use crate::costs::Cost;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl DistanceMatrix {
    /// Zero-filled table with the given dimensions.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows (`len_a + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len_b + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Cost {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// Cell `(i, j)`, or `None` when out of bounds.
    #[inline]
    pub fn try_get(&self, i: usize, j: usize) -> Option<Cost> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Cost) {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j] = value;
    }

    /// Row `i` as a slice of `cols()` cells.
    pub fn row(&self, i: usize) -> &[Cost] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Copy the table out as nested vectors, `result[i][j] == get(i, j)`.
    pub fn to_nested(&self) -> Vec<Vec<Cost>> {
        self.iter_rows().map(<[Cost]>::to_vec).collect()
    }

    /// Widest decimal rendering of any cell.
    fn cell_width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1)
    }

    /// Render the table as a text grid.
    ///
    /// The first line carries `a` as a header; each following line starts with
    /// the matching code point of `b` (a space for the empty prefix) followed by
    /// the costs `(0..=len_a, j)`. Cells are right-aligned to a common width, so
    /// single-digit tables come out compact:
    ///
    /// ```text
    ///   foo
    ///  0123
    /// b1123
    /// a2223
    /// r3333
    /// ```
    pub(crate) fn render(&self, a: &[char], b: &[char]) -> String {
        debug_assert_eq!(self.rows, a.len() + 1);
        debug_assert_eq!(self.cols, b.len() + 1);

        let w = self.cell_width();
        let mut out = String::with_capacity((self.rows + 1) * (self.cols + 1) * (w + 1));

        // Writing into a String cannot fail.
        let _ = write!(out, " {:>w$}", ' ');
        for &ch in a {
            let _ = write!(out, "{ch:>w$}");
        }
        out.push('\n');

        for j in 0..self.cols {
            out.push(if j == 0 { ' ' } else { b[j - 1] });
            for i in 0..self.rows {
                let _ = write!(out, "{:>w$}", self.get(i, j));
            }
            out.push('\n');
        }
        out
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = Cost;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}
