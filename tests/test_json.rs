/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use gridbuf::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

#[test]
fn test_wire_shape() -> Result<()> {
    let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    assert_eq!(matrix.to_json()?, r#"{"matrix":[[1,2,3],[4,5,6]]}"#);

    let empty: Matrix<i32> = Matrix::default();
    assert_eq!(empty.to_json()?, r#"{"matrix":[]}"#);
    Ok(())
}

#[test]
fn test_round_trip_trims_slack() -> Result<()> {
    let mut matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    // Stale content and extra capacity must not survive the wire.
    matrix[(3, 3)] = 99;
    for _ in 0..DEFAULT_CAPACITY {
        matrix.add_row();
    }
    while matrix.num_rows() > 2 {
        matrix.delete_row(matrix.num_rows() - 1)?;
    }
    assert!(matrix.row_capacity() > DEFAULT_CAPACITY);

    let restored = Matrix::<i32>::from_json(&matrix.to_json()?)?;
    assert_eq!(restored, matrix);
    assert_eq!(restored.extent(), (2, 2));
    assert_eq!(restored.row_capacity(), DEFAULT_CAPACITY);
    assert_eq!(restored.column_capacity(), DEFAULT_CAPACITY);
    Ok(())
}

#[test]
fn test_round_trip_random() -> Result<()> {
    env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        let rows = rng.random_range(0..20);
        let columns = rng.random_range(0..20);
        let mut matrix: Matrix<i64> = Matrix::new(rows, columns);
        for r in 0..rows {
            for c in 0..columns {
                matrix[(r, c)] = rng.random();
            }
        }
        let restored = Matrix::<i64>::from_json(&matrix.to_json()?)?;
        assert_eq!(restored, matrix);
        assert_eq!(restored.extent(), matrix.extent());
    }
    Ok(())
}

#[test]
fn test_serde_direct() -> Result<()> {
    // The container serializes through serde directly, not only through the
    // string helpers.
    let matrix = Matrix::from_rows(vec![vec!["a".to_string(), "b".to_string()]])?;
    let json = serde_json::to_string(&matrix)?;
    assert_eq!(json, r#"{"matrix":[["a","b"]]}"#);
    let restored: Matrix<String> = serde_json::from_str(&json)?;
    assert_eq!(restored, matrix);
    Ok(())
}

#[test]
fn test_malformed_payloads() {
    // No envelope field.
    assert!(matches!(
        Matrix::<i32>::from_json(r#"{"rows":[[1]]}"#),
        Err(DeserializationError::Json(_))
    ));
    // Not JSON at all.
    assert!(matches!(
        Matrix::<i32>::from_json("garbage"),
        Err(DeserializationError::Json(_))
    ));
    // Well-formed envelope, ragged content.
    assert!(matches!(
        Matrix::<i32>::from_json(r#"{"matrix":[[1,2],[3]]}"#),
        Err(DeserializationError::Shape(ShapeError {
            row: 1,
            len: 1,
            expected: 2
        }))
    ));
}
