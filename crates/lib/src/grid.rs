//! Bounds-checked grid views over flat slices.

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use thiserror::Error;

use self::sealed::Sealed;

/// Errors raised when treating text as a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("line {line}: expected {expected} columns, but got {actual}")]
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

pub trait GridExt<T>: Sealed {
    /// Convert type into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    #[inline]
    fn as_grid(&self, columns: usize) -> SliceGrid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert type into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements skipped between each row. A trailing partial separator is
    /// allowed, so text with or without a final newline has the same number
    /// of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"ab\ncd".as_grid_with_stride(2, 1);
    /// assert_eq!(grid.rows_len(), 2);
    ///
    /// let grid = b"ab\ncd\n".as_grid_with_stride(2, 1);
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.row(1), Some(&b"cd"[..]));
    /// ```
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> SliceGrid<'_, T> {
        let stride = columns.saturating_add(stride);

        let rows = if columns == 0 {
            0
        } else {
            self.len().saturating_add(stride - columns) / stride
        };

        SliceGrid {
            data: self,
            rows,
            columns,
            stride,
        }
    }
}

pub trait Grid<T> {
    /// Iterator over rows in the grid.
    type Rows<'a>: Iterator<Item = &'a [T]>
    where
        Self: 'a,
        T: 'a;

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = values.as_grid(4);
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]));
    /// ```
    fn rows(&self) -> Self::Rows<'_>;

    /// Access the specified row in the grid.
    fn row(&self, row: usize) -> Option<&[T]>;

    /// Get number of rows in the grid.
    fn rows_len(&self) -> usize;

    /// Get number of columns in the grid.
    fn columns_len(&self) -> usize;

    /// Get the element at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    /// let grid = data.as_grid(4);
    ///
    /// assert_eq!(grid.try_get(0, 1), Some(&2));
    /// assert_eq!(grid.try_get(2, 1), Some(&10));
    /// assert_eq!(grid.try_get(3, 0), None);
    /// assert_eq!(grid.try_get(0, 4), None);
    /// ```
    #[inline]
    fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        self.row(row)?.get(column)
    }
}

/// A grid backed by a slice.
#[derive(Debug)]
pub struct SliceGrid<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
    stride: usize,
}

impl<T> Clone for SliceGrid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceGrid<'_, T> {}

impl<'a, T> Grid<T> for SliceGrid<'a, T> {
    type Rows<'this> = Rows<'this, T> where Self: 'this, T: 'this;

    #[inline]
    fn rows(&self) -> Self::Rows<'_> {
        Rows { grid: *self, row: 0 }
    }

    #[inline]
    fn row(&self, row: usize) -> Option<&[T]> {
        self.row_ref(row)
    }

    #[inline]
    fn rows_len(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns_len(&self) -> usize {
        self.columns
    }
}

impl<'a, T> SliceGrid<'a, T> {
    #[inline]
    fn row_ref(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.rows {
            return None;
        }

        let start = row.checked_mul(self.stride)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }
}

/// Iterator over the rows of a [SliceGrid].
pub struct Rows<'a, T> {
    grid: SliceGrid<'a, T>,
    row: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.grid.row_ref(self.row)?;
        self.row += 1;
        Some(row)
    }
}

/// Treat newline separated text as a rectangular grid of bytes.
///
/// Every line must be as wide as the first one. A final newline is optional.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
/// use lib::grid::{self, GridError};
///
/// let g = grid::lines(b"467..\n...*.\n")?;
/// assert_eq!((g.rows_len(), g.columns_len()), (2, 5));
/// assert_eq!(g.try_get(1, 3), Some(&b'*'));
///
/// let error = grid::lines(b"467..\n...*\n").unwrap_err();
/// assert_eq!(error, GridError::Ragged { line: 2, expected: 5, actual: 4 });
/// # Ok::<_, GridError>(())
/// ```
pub fn lines(data: &[u8]) -> Result<SliceGrid<'_, u8>, GridError> {
    let body = data.strip_suffix(b"\n").unwrap_or(data);

    if body.is_empty() {
        return Err(GridError::Empty);
    }

    let mut expected = None;

    for (n, line) in body.split(|&b| b == b'\n').enumerate() {
        let expected = *expected.get_or_insert(line.len());

        if line.len() != expected {
            return Err(GridError::Ragged {
                line: n + 1,
                expected,
                actual: line.len(),
            });
        }
    }

    let columns = expected.unwrap_or_default();

    if columns == 0 {
        return Err(GridError::Empty);
    }

    Ok(data.as_grid_with_stride(columns, 1))
}

#[cfg(test)]
mod tests {
    use super::{lines, Grid, GridError, GridExt};

    #[test]
    fn test_rows_without_separator() {
        let data = [1, 2, 3, 4, 5, 6];
        let grid = data.as_grid(3);
        assert_eq!(grid.rows_len(), 2);
        assert_eq!(grid.columns_len(), 3);
        assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_partial_row_is_dropped() {
        let grid = b"abc\nde".as_grid_with_stride(3, 1);
        assert_eq!(grid.rows_len(), 1);
        assert_eq!(grid.rows().count(), 1);
    }

    #[test]
    fn test_get_at_edges() {
        let grid = lines(b"12\n34\n").unwrap();
        assert_eq!(grid.try_get(1, 1), Some(&b'4'));
        assert_eq!(grid.try_get(1, 2), None);
        assert_eq!(grid.try_get(2, 0), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(lines(b"").unwrap_err(), GridError::Empty);
        assert_eq!(lines(b"\n").unwrap_err(), GridError::Empty);
    }

    #[test]
    fn test_ragged_last_line() {
        let error = lines(b"abc\nabc\nab").unwrap_err();

        assert_eq!(
            error,
            GridError::Ragged {
                line: 3,
                expected: 3,
                actual: 2
            }
        );
    }
}
