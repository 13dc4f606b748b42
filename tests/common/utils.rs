// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use ndarray::Array3;
use ndarray_npy::write_npy;

use asmac::{config::AsmacConfig, model::ModelType, runner::Job};

// Deterministic kernels with mixed signs, so some windows score and some don't.
#[allow(dead_code)]
pub fn kernels(embed_dim: usize, alphabet_size: usize, kernel_size: usize) -> Array3<f32> {
    Array3::from_shape_fn((embed_dim, alphabet_size, kernel_size), |(e, a, k)| {
        (((e * 7 + a * 3 + k * 5) % 11) as f32 - 5.0) / 5.0
    })
}

/// Writes weights for `model_type` into `model_dir` and returns a matching config.
#[allow(dead_code)]
pub fn config_with_weights(
    model_dir: &Path,
    model_type: ModelType,
    embed_dim: usize,
    kernel_size: usize,
) -> AsmacConfig {
    let config = AsmacConfig {
        model_dir: model_dir.to_path_buf(),
        embed_dim,
        kernel_size,
        ..AsmacConfig::default()
    };
    let params = config.net_params();
    let path = model_dir.join(format!("{}.npy", model_type.label()));
    write_npy(
        path,
        &kernels(params.embed_dim, params.alphabet_size, params.kernel_size),
    )
    .expect("write weights");
    config
}

#[allow(dead_code)]
pub fn job(input: &str, output: &Path, model: &str) -> Job {
    Job {
        input: PathBuf::from(input),
        output: output.to_path_buf(),
        model: String::from(model),
    }
}

/// Reads back a written table as (column labels, rows of (row label, values)).
#[allow(dead_code)]
pub fn read_table(path: &Path) -> (Vec<String>, Vec<(String, Vec<f64>)>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("output exists");
    let mut records = reader.records().map(|r| r.expect("valid csv record"));
    let header = records.next().expect("header row");
    assert_eq!(&header[0], "");
    let columns = header.iter().skip(1).map(String::from).collect();
    let rows = records
        .map(|rec| {
            let label = rec[0].to_string();
            let values = rec
                .iter()
                .skip(1)
                .map(|v| v.parse::<f64>().expect("numeric cell"))
                .collect();
            (label, values)
        })
        .collect();
    (columns, rows)
}
