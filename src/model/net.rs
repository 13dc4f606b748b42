// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// CPU implementation of the AsMac embedding network.
//
// The network holds `E` kernel sequences, each a soft (`A` x `K`) profile over the alphabet.
// A sequence is embedded by sliding every kernel along it and keeping the best (non-negative)
// match score, so entry `e` of the embedding says how well kernel `e` occurs somewhere in the
// sequence. Two sequences are then compared by the normalized L1 distance of their
// embeddings, which lies in [0, 1].

use std::path::Path;

use log::debug;
use ndarray::{s, Array1, Array2, Array3, ArrayView2, CowArray, Ix2};
use ndarray_npy::read_npy;

use crate::errors::AsmacError;
use crate::model::{DistanceModel, NetParams};

#[derive(Debug, Clone)]
pub struct AsmacNet {
    kernels: Array3<f32>,
}

impl AsmacNet {
    /// `kernels` has shape (embedding width, alphabet size, kernel length).
    pub fn new(kernels: Array3<f32>) -> Self {
        AsmacNet { kernels }
    }

    pub fn from_npy(path: &Path, params: &NetParams) -> Result<Self, AsmacError> {
        if !path.is_file() {
            return Err(AsmacError::ArtifactLoad {
                path: path.to_path_buf(),
                reason: String::from("file not found"),
            });
        }
        let kernels: Array3<f32> = read_npy(path).map_err(|e| AsmacError::ArtifactLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if kernels.dim() != params.weights_shape() {
            return Err(AsmacError::ArtifactLoad {
                path: path.to_path_buf(),
                reason: format!(
                    "expected weights of shape {:?}, found {:?}",
                    params.weights_shape(),
                    kernels.dim()
                ),
            });
        }
        debug!("weights {:?} read from {}", kernels.dim(), path.display());
        Ok(AsmacNet::new(kernels))
    }

    pub fn params(&self) -> NetParams {
        let (embed_dim, alphabet_size, kernel_size) = self.kernels.dim();
        NetParams {
            embed_dim,
            alphabet_size,
            kernel_size,
        }
    }

    pub fn embed(&self, encoded: &Array2<f32>) -> Result<Array1<f64>, AsmacError> {
        let params = self.params();
        if encoded.nrows() != params.alphabet_size {
            return Err(AsmacError::Format(format!(
                "encoded sequence has {} channels, the network expects {}",
                encoded.nrows(),
                params.alphabet_size
            )));
        }
        let x = pad_to_width(encoded, params.kernel_size);

        let mut embedding = Array1::<f64>::zeros(params.embed_dim);
        for (e, kernel) in self.kernels.outer_iter().enumerate() {
            let best = x
                .windows((params.alphabet_size, params.kernel_size))
                .into_iter()
                .map(|window| match_score(&window, &kernel))
                .fold(f32::NEG_INFINITY, f32::max);
            embedding[e] = f64::from(best.max(0.0));
        }
        Ok(embedding)
    }
}

// Sequences shorter than a kernel get zero columns on the right; zeros never score.
fn pad_to_width(encoded: &Array2<f32>, width: usize) -> CowArray<'_, f32, Ix2> {
    if encoded.ncols() >= width {
        return CowArray::from(encoded.view());
    }
    let mut padded = Array2::<f32>::zeros((encoded.nrows(), width));
    padded
        .slice_mut(s![.., ..encoded.ncols()])
        .assign(encoded);
    CowArray::from(padded)
}

fn match_score(window: &ArrayView2<f32>, kernel: &ArrayView2<f32>) -> f32 {
    window.iter().zip(kernel.iter()).map(|(x, w)| x * w).sum()
}

/// `sum |u - v| / (sum u + sum v)`; 0 when both embeddings are all zero.
pub fn normalized_l1(u: &Array1<f64>, v: &Array1<f64>) -> f64 {
    let diff: f64 = u.iter().zip(v.iter()).map(|(a, b)| (a - b).abs()).sum();
    let total = u.sum() + v.sum();
    if total == 0.0 {
        0.0
    } else {
        diff / total
    }
}

impl DistanceModel for AsmacNet {
    fn pairwise_distances(&self, batch: &[Array2<f32>]) -> Result<Array2<f64>, AsmacError> {
        let embeddings = batch
            .iter()
            .map(|encoded| self.embed(encoded))
            .collect::<Result<Vec<_>, _>>()?;
        let n = embeddings.len();
        let mut distances = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            distances[[i, i]] = normalized_l1(&embeddings[i], &embeddings[i]);
            for j in (i + 1)..n {
                let d = normalized_l1(&embeddings[i], &embeddings[j]);
                distances[[i, j]] = d;
                distances[[j, i]] = d;
            }
        }
        Ok(distances)
    }
}
