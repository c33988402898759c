/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error types returned by fallible [`Matrix`](crate::Matrix) operations.
//!
//! All errors are synchronous values: they are returned at the point of the
//! offending call and propagated with `?`, never retried or recovered
//! internally. Raw indexing is not covered by these types — it panics out of
//! the underlying storage when an index exceeds the physical capacity (see
//! [`Matrix`](crate::Matrix)).

use thiserror::Error;

/// An index was outside the valid bound of a row/column operation.
///
/// Insertion accepts indices in `[0, extent]` (one past the end is the
/// append position); deletion accepts `[0, extent)`. Indices are `usize`, so
/// the negative half of the bound cannot be represented at all.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The row index exceeded the number of logical rows.
    #[error("row index {index} is out of range for a matrix with {rows} rows")]
    Row { index: usize, rows: usize },

    /// The column index exceeded the number of logical columns.
    #[error("column index {index} is out of range for a matrix with {columns} columns")]
    Column { index: usize, columns: usize },
}

/// The rows passed to [`Matrix::from_rows`](crate::Matrix::from_rows) do not
/// all have the same length.
///
/// The expected length is that of the first row; `row` is the index of the
/// first row that differs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("row {row} has length {len}, but the first row has length {expected}")]
pub struct ShapeError {
    /// Index of the offending row.
    pub row: usize,
    /// Length of the offending row.
    pub len: usize,
    /// Length of the first row, which every other row must match.
    pub expected: usize,
}

/// [`Matrix::from_json`](crate::Matrix::from_json) could not turn the input
/// into a matrix.
#[derive(Error, Debug)]
pub enum DeserializationError {
    /// The payload was not valid JSON, or the `matrix` envelope was absent.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The decoded envelope was not rectangular.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
