/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Lazy views over the logical extent of a [`Matrix`].
//!
//! Both iterators yield owned copies (`Vec<T>`) trimmed strictly to the
//! logical extent, so stale cells never appear. Every call to
//! [`Matrix::rows`] or [`Matrix::columns`] returns a fresh iterator with its
//! own position; there is no shared traversal state.

use std::ops::Range;

use super::Matrix;

/// An iterator over owned copies of the logical rows of a [`Matrix`],
/// returned by [`Matrix::rows`].
#[derive(Clone, Debug)]
pub struct Rows<'a, T> {
    matrix: &'a Matrix<T>,
    range: Range<usize>,
}

impl<'a, T> Rows<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self {
            matrix,
            range: 0..matrix.rows,
        }
    }
}

impl<T: Clone> Iterator for Rows<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.range.next()?;
        Some(self.matrix.storage[row][..self.matrix.columns].to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for Rows<'_, T> {}

/// An iterator over owned copies of the logical columns of a [`Matrix`],
/// returned by [`Matrix::columns`].
///
/// Columns are not contiguous in the backing store, so each item gathers one
/// cell from every logical row.
#[derive(Clone, Debug)]
pub struct Columns<'a, T> {
    matrix: &'a Matrix<T>,
    range: Range<usize>,
}

impl<'a, T> Columns<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self {
            matrix,
            range: 0..matrix.columns,
        }
    }
}

impl<T: Clone> Iterator for Columns<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.range.next()?;
        Some(
            self.matrix.storage[..self.matrix.rows]
                .iter()
                .map(|row| row[column].clone())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for Columns<'_, T> {}

/// Convenience implementation that makes it possible to iterate over the
/// logical rows of a reference with a `for` loop.
impl<'a, T: Clone> IntoIterator for &'a Matrix<T> {
    type Item = Vec<T>;
    type IntoIter = Rows<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
