/*!
# Compressed Sparse Row Matrices

[`CsrMatrix`] is the sparse export format of graph adjacency matrices.

- `columns` stores the column ids of all non-zero cells row after row,
- `values` stores the matching cell values,
- `offsets` stores row boundaries: row `u` occupies `offsets[u]..offsets[u + 1]`.

Column ids are strictly ascending within every row, so single cells are found by
binary search.
*/

use ndarray::Array2;
use num::{One, Zero};

use crate::{edge::NumEdges, node::*};

/// Square sparse matrix in compressed sparse row layout
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<C> {
    offsets: Vec<usize>,
    columns: Vec<Node>,
    values: Vec<C>,
}

impl<C> Default for CsrMatrix<C> {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            columns: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<C> CsrMatrix<C> {
    /// Builds a matrix from one iterator of `(column, value)` per row.
    /// The number of rows determines the dimension.
    ///
    /// ** Panics if a row is not strictly ascending or a column is out of range **
    ///
    /// # Examples
    /// ```
    /// use relgraph::matrix::CsrMatrix;
    ///
    /// let m = CsrMatrix::from_rows(vec![vec![(1, 2.0)], vec![], vec![(0, 1.0), (2, 3.0)]]);
    /// assert_eq!(m.dim(), 3);
    /// assert_eq!(m.number_of_entries(), 3);
    /// assert_eq!(m.get(2, 2), Some(&3.0));
    /// assert_eq!(m.get(1, 0), None);
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (Node, C)>,
    {
        let mut matrix = Self::default();
        for row in rows {
            let start = matrix.columns.len();
            for (column, value) in row {
                assert!(
                    matrix.columns.len() == start
                        || matrix.columns.last().is_some_and(|&last| last < column),
                    "row is not strictly ascending"
                );
                matrix.columns.push(column);
                matrix.values.push(value);
            }
            matrix.offsets.push(matrix.columns.len());
        }

        let n = matrix.dim();
        assert!(
            matrix.columns.iter().all(|&c| (c as usize) < n),
            "column out of range"
        );
        matrix
    }

    /// Returns the number of rows (and columns)
    pub fn dim(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns the number of stored (non-zero) cells
    pub fn number_of_entries(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column ids and values of row `u`.
    /// ** Panics if `u >= dim` **
    pub fn row(&self, u: Node) -> (&[Node], &[C]) {
        let range = self.offsets[u as usize]..self.offsets[u as usize + 1];
        (&self.columns[range.clone()], &self.values[range])
    }

    /// Returns the value of cell `(u, v)` if it is stored
    pub fn get(&self, u: Node, v: Node) -> Option<&C> {
        if u as usize >= self.dim() {
            return None;
        }
        let (columns, values) = self.row(u);
        columns.binary_search(&v).ok().map(|pos| &values[pos])
    }

    /// Returns all stored cells as `(row, column, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Node, Node, &C)> + '_ {
        (0..self.dim() as Node).flat_map(move |u| {
            let (columns, values) = self.row(u);
            columns.iter().zip(values).map(move |(&v, c)| (u, v, c))
        })
    }

    /// Expands the matrix into a dense one
    pub fn to_dense(&self) -> Array2<C>
    where
        C: Clone + Zero,
    {
        let n = self.dim();
        let mut dense = Array2::zeros((n, n));
        for (u, v, c) in self.iter() {
            dense[[u as usize, v as usize]] = c.clone();
        }
        dense
    }
}

/// Cell value of `count` parallel edges
pub(crate) fn cell_value<C: Zero + One>(count: NumEdges) -> C {
    (0..count).fold(C::zero(), |acc, _| acc + C::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn rows_and_cells() {
        let m = CsrMatrix::from_rows([vec![(0, 1u32), (3, 2)], vec![], vec![(1, 5)], vec![]]);

        assert_eq!(m.dim(), 4);
        assert_eq!(m.number_of_entries(), 3);
        assert_eq!(m.row(0), (&[0, 3][..], &[1, 2][..]));
        assert!(m.row(1).0.is_empty() && m.row(1).1.is_empty());
        assert_eq!(m.get(0, 3), Some(&2));
        assert_eq!(m.get(3, 3), None);
        assert_eq!(m.get(9, 0), None);
        assert_eq!(m.iter().collect_vec(), vec![(0, 0, &1), (0, 3, &2), (2, 1, &5)]);

        let dense = m.to_dense();
        assert_eq!(dense[[0, 3]], 2);
        assert_eq!(dense[[2, 1]], 5);
        assert_eq!(dense.sum(), 8);
    }

    #[test]
    #[should_panic]
    fn unsorted_row_panics() {
        CsrMatrix::from_rows([vec![(1, 1.0), (0, 1.0)], vec![]]);
    }

    #[test]
    fn cell_values_count_edges() {
        assert_eq!(cell_value::<f64>(0), 0.0);
        assert_eq!(cell_value::<u8>(3), 3);
        assert_eq!(cell_value::<i64>(1), 1);
    }
}
