// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::time::{Duration, Instant};

use log::info;
use ndarray::Array2;

use crate::errors::AsmacError;
use crate::model::DistanceModel;

/// Square table of distances, labelled on both axes by the sequence headers.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    pub labels: Vec<String>,
    pub values: Array2<f64>,
}

impl DistanceMatrix {
    pub fn new(labels: Vec<String>, values: Array2<f64>) -> Result<Self, AsmacError> {
        let n = labels.len();
        if values.dim() != (n, n) {
            return Err(AsmacError::Format(format!(
                "expected a {0}x{0} distance matrix for {0} sequences, got {1}x{2}",
                n,
                values.nrows(),
                values.ncols()
            )));
        }
        Ok(DistanceMatrix { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn zero_diagonal(&mut self) {
        self.values.diag_mut().fill(0.0);
    }
}

/// Runs the whole batch through the model in one go. The diagonal is zeroed whatever the model
/// returned there.
pub fn compute_distances<M: DistanceModel + ?Sized>(
    model: &M,
    labels: Vec<String>,
    batch: &[Array2<f32>],
) -> Result<(DistanceMatrix, Duration), AsmacError> {
    if labels.len() != batch.len() {
        return Err(AsmacError::Format(format!(
            "{} labels for {} encoded sequences",
            labels.len(),
            batch.len()
        )));
    }
    let tic = Instant::now();
    let raw = model.pairwise_distances(batch)?;
    let elapsed = tic.elapsed();
    info!("forward pass over {} sequences took {:?}", batch.len(), elapsed);

    let mut matrix = DistanceMatrix::new(labels, raw)?;
    matrix.zero_diagonal();
    Ok((matrix, elapsed))
}
