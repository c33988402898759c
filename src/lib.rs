/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod error;
pub mod matrix;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::matrix::iter::{Columns, Rows};
    pub use crate::matrix::{Matrix, DEFAULT_CAPACITY, GROWTH_INCREMENT};
}

pub use error::{DeserializationError, RangeError, ShapeError};
pub use matrix::Matrix;
