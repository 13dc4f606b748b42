// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod net;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::info;
use ndarray::Array2;

use crate::errors::AsmacError;

pub use crate::model::net::AsmacNet;

/// The pretrained configurations. Each has its own weights file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelType {
    S16Full,
    S16V4,
    S16V3V4,
    S23Full,
    S23V5,
}

impl ModelType {
    pub const ALL: [ModelType; 5] = [
        ModelType::S16Full,
        ModelType::S16V4,
        ModelType::S16V3V4,
        ModelType::S23Full,
        ModelType::S23V5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModelType::S16Full => "16S-full",
            ModelType::S16V4 => "16S-V4",
            ModelType::S16V3V4 => "16S-V3-V4",
            ModelType::S23Full => "23S-full",
            ModelType::S23V5 => "23S-V5",
        }
    }

    // Typical length of the sequences the model was trained on.
    pub fn default_nominal_length(&self) -> usize {
        match self {
            ModelType::S16Full => 1400,
            ModelType::S16V4 => 151,
            ModelType::S16V3V4 => 465,
            ModelType::S23Full => 3000,
            ModelType::S23V5 => 400,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        ModelType::ALL.iter().map(ModelType::label).collect()
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ModelType {
    type Err = AsmacError;

    // Only the last path component counts, so "models/16S-V4" selects 16S-V4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(s);
        ModelType::ALL
            .into_iter()
            .find(|mt| mt.label() == label)
            .ok_or_else(|| AsmacError::UnsupportedModel(s.to_string()))
    }
}

/// Shape of the embedding network.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NetParams {
    pub embed_dim: usize,
    pub alphabet_size: usize,
    pub kernel_size: usize,
}

impl NetParams {
    pub fn weights_shape(&self) -> (usize, usize, usize) {
        (self.embed_dim, self.alphabet_size, self.kernel_size)
    }
}

/// Anything that maps a batch of one-hot encoded sequences to an N x N matrix of distances.
pub trait DistanceModel {
    fn pairwise_distances(&self, batch: &[Array2<f32>]) -> Result<Array2<f64>, AsmacError>;
}

pub fn weights_path(model_dir: &Path, model_type: ModelType) -> PathBuf {
    model_dir.join(format!("{}.npy", model_type.label()))
}

pub fn load_model(
    model_type: ModelType,
    params: &NetParams,
    model_dir: &Path,
) -> Result<AsmacNet, AsmacError> {
    let path = weights_path(model_dir, model_type);
    info!("Loading {} weights from {}", model_type, path.display());
    AsmacNet::from_npy(&path, params)
}
