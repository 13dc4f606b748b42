// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use approx::assert_relative_eq;

use asmac::{errors::AsmacError, model::ModelType, runner::execute};

use crate::common::utils;

#[test]
fn test_two_records_end_to_end() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 8, 3);
    let out = work.path().join("two.csv");

    let written = execute(
        &utils::job("tests/data/two_records.fa", &out, "16S-full"),
        work.path(),
        &config,
    )
    .expect("pipeline succeeds");
    assert_eq!(written, out);

    let (columns, rows) = utils::read_table(&out);
    assert_eq!(columns, vec![">A", ">B"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, ">A");
    assert_eq!(rows[1].0, ">B");
    for (i, (_, values)) in rows.iter().enumerate() {
        assert_eq!(values.len(), 2);
        assert_eq!(values[i], 0.0);
    }
    assert_relative_eq!(rows[0].1[1], rows[1].1[0]);
    assert!(rows[0].1[1] >= 0.0 && rows[0].1[1] <= 1.0);
}

#[test]
fn test_default_output_goes_to_cwd() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S16V4, 4, 2);

    let written = execute(
        &utils::job("tests/data/two_records.fa", work.path(), "16S-V4"),
        work.path(),
        &config,
    )
    .expect("pipeline succeeds");
    assert_eq!(written, work.path().join("two_records_distances.csv"));
    assert!(written.is_file());
}

#[test]
fn test_full_size_network() {
    let work = tempfile::tempdir().expect("tempdir");
    // Default hyperparameters: 300 kernels of length 20 over 4 channels.
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 300, 20);
    let out = work.path().join("rrna.csv");

    execute(
        &utils::job("tests/data/rrna_fragments.fa", &out, "16S-full"),
        work.path(),
        &config,
    )
    .expect("pipeline succeeds");

    let (columns, rows) = utils::read_table(&out);
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[0], ">seq1 Escherichia coli 16S fragment");
    for (i, (label, values)) in rows.iter().enumerate() {
        assert_eq!(label, &columns[i]);
        assert_eq!(values.len(), 4);
        assert_eq!(values[i], 0.0);
    }
    // seq3 and seq4 are the same amplicon, spelled with T and with U.
    assert_eq!(rows[2].1[3], 0.0);
    assert!(rows[0].1[1] > 0.0);
}

#[test]
fn test_model_path_prefix_is_ignored() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S23V5, 4, 2);
    let out = work.path().join("prefixed.csv");
    execute(
        &utils::job("tests/data/two_records.fa", &out, "some/dir/23S-V5"),
        work.path(),
        &config,
    )
    .expect("pipeline succeeds");
    assert!(out.is_file());
}

#[test]
fn test_missing_weights() {
    let work = tempfile::tempdir().expect("tempdir");
    // Weights exist for 16S-full only.
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 4, 2);
    let out = work.path().join("never.csv");
    let err = execute(
        &utils::job("tests/data/two_records.fa", &out, "23S-full"),
        work.path(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AsmacError::ArtifactLoad { .. }));
    assert!(!out.exists());
}

#[test]
fn test_incompatible_weights() {
    let work = tempfile::tempdir().expect("tempdir");
    let mut config = utils::config_with_weights(work.path(), ModelType::S16Full, 4, 2);
    config.kernel_size = 20;
    let out = work.path().join("never.csv");
    let err = execute(
        &utils::job("tests/data/two_records.fa", &out, "16S-full"),
        work.path(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AsmacError::ArtifactLoad { .. }));
    assert!(!out.exists());
}

#[test]
fn test_invalid_alphabet_writes_nothing() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 4, 2);
    let out = work.path().join("never.csv");
    let err = execute(
        &utils::job("tests/data/bad_symbol.fa", &out, "16S-full"),
        work.path(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AsmacError::InvalidAlphabet { symbol: 'N', .. }));
    assert!(!out.exists());
}

#[test]
fn test_empty_input() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 4, 2);
    let out = work.path().join("never.csv");
    let err = execute(
        &utils::job("tests/data/empty.fa", &out, "16S-full"),
        work.path(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AsmacError::EmptyInput(_)));
    assert!(!out.exists());
}

#[test]
fn test_non_csv_output_rejected() {
    let work = tempfile::tempdir().expect("tempdir");
    let config = utils::config_with_weights(work.path(), ModelType::S16Full, 4, 2);
    let err = execute(
        &utils::job("tests/data/two_records.fa", &work.path().join("d.txt"), "16S-full"),
        work.path(),
        &config,
    )
    .unwrap_err();
    assert!(matches!(err, AsmacError::InvalidOutputFormat(_)));
}
