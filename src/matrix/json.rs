/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The JSON envelope of a [`Matrix`].
//!
//! The wire shape is a single-field object, `{"matrix": [[…], …]}`, whose
//! value is exactly the logical `rows × columns` content; capacity slack is
//! trimmed before encoding and re-derived on decoding, so only logical
//! content round-trips.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Matrix;
use crate::error::DeserializationError;

/// The transport shape. Serialization fills it with a trimmed copy of the
/// logical extent; deserialization hands its rows to
/// [`Matrix::from_rows`], which re-derives the extent and re-validates
/// rectangularity.
#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    matrix: Vec<Vec<T>>,
}

impl<T: Clone + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            matrix: self.rows().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Default + Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::deserialize(deserializer)?;
        Self::from_rows(envelope.matrix).map_err(serde::de::Error::custom)
    }
}

impl<T: Clone + Serialize> Matrix<T> {
    /// Encodes the logical content as a JSON envelope.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridbuf::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.to_json().unwrap(), r#"{"matrix":[[1,2,3],[4,5,6]]}"#);
    /// ```
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: Default + DeserializeOwned> Matrix<T> {
    /// Decodes a JSON envelope into a new matrix.
    ///
    /// The capacity of the result does not depend on the encoding matrix:
    /// the extent is re-derived from the decoded rows and the capacity is
    /// recomputed as in [`Matrix::from_rows`].
    pub fn from_json(data: &str) -> Result<Self, DeserializationError> {
        let envelope: Envelope<T> = serde_json::from_str(data)?;
        Ok(Self::from_rows(envelope.matrix)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn test_wire_shape() {
        let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(
            matrix.to_json().unwrap(),
            r#"{"matrix":[[1,2,3],[4,5,6]]}"#
        );
    }

    #[test]
    fn test_slack_is_not_serialized() {
        let mut matrix = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        matrix[(3, 3)] = 99;
        assert_eq!(matrix.to_json().unwrap(), r#"{"matrix":[[1,2]]}"#);
    }

    #[test]
    fn test_missing_envelope() {
        assert!(Matrix::<i32>::from_json(r#"{"rows":[[1]]}"#).is_err());
        assert!(Matrix::<i32>::from_json("not json").is_err());
    }
}
