/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The [`Matrix`] container and its supporting types.

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::error::{RangeError, ShapeError};

pub mod iter;
mod json;

use iter::{Columns, Rows};

/// Minimum physical capacity of each dimension of a [`Matrix`].
///
/// Every matrix is backed by at least a `DEFAULT_CAPACITY` ×
/// `DEFAULT_CAPACITY` rectangle, however small its logical extent.
pub const DEFAULT_CAPACITY: usize = 4;

/// Amount added to a capacity dimension each time it must grow.
///
/// Growth is additive, not geometric: appending rows or columns is O(*n*)
/// amortized in the worst case, and the capacity reached after a sequence of
/// insertions is predictable.
pub const GROWTH_INCREMENT: usize = 2;

/// A growable dense two-dimensional array.
///
/// The matrix distinguishes its *logical extent* — the
/// [`num_rows`](Matrix::num_rows) × [`num_columns`](Matrix::num_columns)
/// size seen by every enumeration and serialization operation — from its
/// *physical capacity*, the allocated
/// [`row_capacity`](Matrix::row_capacity) ×
/// [`column_capacity`](Matrix::column_capacity) backing rectangle, which is
/// always at least as large. Cells inside the capacity but outside the
/// logical extent are *stale*: they hold leftover or default content with no
/// defined meaning.
///
/// Raw indexing with `m[(row, column)]` goes straight to the backing store.
/// It does not validate against the logical extent, so stale cells can be
/// read and written freely; only indices beyond the physical capacity panic,
/// out of the underlying `Vec`. The [`rows`](Matrix::rows) and
/// [`columns`](Matrix::columns) iterators, [`Display`], and the JSON
/// envelope trim strictly to the logical extent and never expose stale
/// cells.
///
/// # Examples
///
/// ```
/// use gridbuf::Matrix;
///
/// let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// m.add_column();
/// m[(0, 2)] = 5;
/// assert_eq!(m.extent(), (2, 3));
/// assert_eq!(m.rows().next().unwrap(), vec![1, 2, 5]);
/// ```
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    /// The number of logical rows.
    rows: usize,
    /// The number of logical columns.
    columns: usize,
    /// The number of physical rows; invariant: `rows <= row_capacity` and
    /// `storage.len() == row_capacity`.
    row_capacity: usize,
    /// The number of physical columns; invariant: `columns <=
    /// column_capacity` and every row of `storage` has this length.
    column_capacity: usize,
    /// The backing rectangle; cells outside the top-left `rows × columns`
    /// sub-rectangle are stale.
    storage: Vec<Vec<T>>,
}

impl<T: Default> core::default::Default for Matrix<T> {
    /// Creates an empty matrix over a [`DEFAULT_CAPACITY`]-square backing
    /// store.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Default> Matrix<T> {
    /// Creates a new `rows` × `columns` matrix with all cells set to
    /// `T::default()`.
    ///
    /// Each capacity dimension is the maximum of the requested dimension and
    /// [`DEFAULT_CAPACITY`].
    pub fn new(rows: usize, columns: usize) -> Self {
        let row_capacity = rows.max(DEFAULT_CAPACITY);
        let column_capacity = columns.max(DEFAULT_CAPACITY);
        Self {
            rows,
            columns,
            row_capacity,
            column_capacity,
            storage: Vec::from_iter((0..row_capacity).map(|_| Self::default_row(column_capacity))),
        }
    }

    /// Creates a new matrix from a list of rows, which must all have the
    /// same length.
    ///
    /// The number of columns is the length of the first row (zero if there
    /// are no rows); a [`ShapeError`] is returned if any later row differs.
    /// The rows are consumed and padded to capacity with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbuf::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.extent(), (2, 3));
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(data: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let columns = data.first().map_or(0, Vec::len);
        for (row, values) in data.iter().enumerate() {
            if values.len() != columns {
                return Err(ShapeError {
                    row,
                    len: values.len(),
                    expected: columns,
                });
            }
        }

        let rows = data.len();
        let row_capacity = rows.max(DEFAULT_CAPACITY);
        let column_capacity = columns.max(DEFAULT_CAPACITY);
        let mut storage = data;
        for row in &mut storage {
            row.resize_with(column_capacity, T::default);
        }
        storage.resize_with(row_capacity, || Self::default_row(column_capacity));
        Ok(Self {
            rows,
            columns,
            row_capacity,
            column_capacity,
            storage,
        })
    }

    /// Appends one row at the logical end, growing the row capacity first if
    /// the matrix is full.
    ///
    /// The appended row is the physical row just past the previous extent,
    /// so it exposes whatever stale content that row holds; it is a default
    /// row only if nothing was ever written there.
    pub fn add_row(&mut self) {
        if self.rows == self.row_capacity {
            self.grow_rows();
        }
        self.rows += 1;
    }

    /// Appends one column at the logical end, growing the column capacity
    /// first if the matrix is full.
    ///
    /// Like [`add_row`](Matrix::add_row), this exposes the stale content of
    /// the newly covered physical column.
    pub fn add_column(&mut self) {
        if self.columns == self.column_capacity {
            self.grow_columns();
        }
        self.columns += 1;
    }

    /// Inserts a row, given an insertion index in `[0, num_rows]`.
    ///
    /// The index is only validated: the new row is not placed at `index` and
    /// no existing row is shifted. The matrix always grows by exposing one
    /// more physical row at the logical end, exactly as
    /// [`add_row`](Matrix::add_row) does. This asymmetry with
    /// [`delete_row`](Matrix::delete_row), which does shift, is kept as the
    /// container's documented behavior.
    pub fn insert_row(&mut self, index: usize) -> Result<(), RangeError> {
        if index > self.rows {
            return Err(RangeError::Row {
                index,
                rows: self.rows,
            });
        }
        self.add_row();
        Ok(())
    }

    /// Inserts a column, given an insertion index in `[0, num_columns]`.
    ///
    /// The index is only validated; see
    /// [`insert_row`](Matrix::insert_row) — the new column always appears at
    /// the logical end.
    pub fn insert_column(&mut self, index: usize) -> Result<(), RangeError> {
        if index > self.columns {
            return Err(RangeError::Column {
                index,
                columns: self.columns,
            });
        }
        self.add_column();
        Ok(())
    }

    /// Extends the backing store by [`GROWTH_INCREMENT`] default rows.
    fn grow_rows(&mut self) {
        let new_capacity = self.row_capacity + GROWTH_INCREMENT;
        log::debug!(
            "Growing row capacity from {} to {}",
            self.row_capacity,
            new_capacity
        );
        let column_capacity = self.column_capacity;
        self.storage
            .resize_with(new_capacity, || Self::default_row(column_capacity));
        self.row_capacity = new_capacity;
    }

    /// Extends every physical row by [`GROWTH_INCREMENT`] default cells.
    fn grow_columns(&mut self) {
        let new_capacity = self.column_capacity + GROWTH_INCREMENT;
        log::debug!(
            "Growing column capacity from {} to {}",
            self.column_capacity,
            new_capacity
        );
        for row in &mut self.storage {
            row.resize_with(new_capacity, T::default);
        }
        self.column_capacity = new_capacity;
    }

    fn default_row(len: usize) -> Vec<T> {
        Vec::from_iter((0..len).map(|_| T::default()))
    }
}

impl<T> Matrix<T> {
    /// Returns the number of logical rows.
    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of logical columns.
    #[inline(always)]
    pub fn num_columns(&self) -> usize {
        self.columns
    }

    /// Returns the logical extent as a `(num_rows, num_columns)` pair.
    #[inline(always)]
    pub fn extent(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Returns the number of physical rows in the backing store.
    #[inline(always)]
    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    /// Returns the length of every physical row in the backing store.
    #[inline(always)]
    pub fn column_capacity(&self) -> usize {
        self.column_capacity
    }

    /// Deletes the row at `index`, shifting the rows after it up by one.
    ///
    /// This is a pointer-level shuffle of the row vectors, with no element
    /// copies and no capacity change; the removed row's buffer survives as a
    /// stale physical row past the logical end.
    pub fn delete_row(&mut self, index: usize) -> Result<(), RangeError> {
        if index >= self.rows {
            return Err(RangeError::Row {
                index,
                rows: self.rows,
            });
        }
        self.storage[index..self.rows].rotate_left(1);
        self.rows -= 1;
        Ok(())
    }

    /// Deletes the column at `index`, shifting the cells after it left by
    /// one in every logical row.
    ///
    /// Stale rows are not touched, and no row buffer shrinks: the freed
    /// logical column becomes stale storage and the column capacity is
    /// unchanged.
    pub fn delete_column(&mut self, index: usize) -> Result<(), RangeError> {
        if index >= self.columns {
            return Err(RangeError::Column {
                index,
                columns: self.columns,
            });
        }
        for row in &mut self.storage[..self.rows] {
            row[index..self.columns].rotate_left(1);
        }
        self.columns -= 1;
        Ok(())
    }

    /// Returns a fresh iterator over owned copies of the logical rows.
    ///
    /// Each call starts an independent traversal from the first logical row;
    /// stale cells are never yielded.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(self)
    }

    /// Returns a fresh iterator over owned copies of the logical columns.
    ///
    /// Each call starts an independent traversal from the first logical
    /// column; stale cells are never yielded.
    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(self)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Reads a cell of the backing store, stale cells included.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, column) = index;
        &self.storage[row][column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    /// Writes a cell of the backing store, stale cells included.
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, column) = index;
        &mut self.storage[row][column]
    }
}

/// Manual implementation of [`PartialEq`]. This implementation is necessary
/// because the derived one would compare the capacity fields and the stale
/// cells of the backing store, so two matrices with identical logical
/// content but different growth histories would compare unequal, and this is
/// not the intended semantics.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.columns != other.columns {
            return false;
        }
        self.storage[..self.rows]
            .iter()
            .zip(&other.storage[..other.rows])
            .all(|(a, b)| a[..self.columns] == b[..other.columns])
    }
}

impl<T: Eq> Eq for Matrix<T> {}

/// Renders the logical content only, with columns separated by `", "` and
/// rows separated by newlines, using each element's own [`Display`]
/// implementation. There is no trailing newline.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.storage[..self.rows].iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row[..self.columns].iter().format(", "))?;
        }
        Ok(())
    }
}
