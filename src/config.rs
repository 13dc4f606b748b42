// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Deserializer};

use crate::encoding::Alphabet;
use crate::errors::AsmacError;
use crate::model::{ModelType, NetParams};

pub const CONFIG_FILE_NAME: &str = ".asmacconfig";

/// Run-time settings. Every field has a default, so a config file only needs to name the values
/// it changes, e.g. `{ "model_dir": "/opt/asmac/model" }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsmacConfig {
    /// Directory holding one `<label>.npy` weights file per model type.
    pub model_dir: PathBuf,
    /// Number of kernel sequences (width of the embedding).
    pub embed_dim: usize,
    /// Kernel length.
    pub kernel_size: usize,
    /// Symbols mapped to each one-hot channel, in channel order.
    pub channels: Vec<String>,
    /// Expected sequence length per model label. Informational only. Labels a file leaves out
    /// keep their built-in length.
    #[serde(deserialize_with = "merge_nominal_lengths")]
    pub nominal_lengths: BTreeMap<String, usize>,
}

impl Default for AsmacConfig {
    fn default() -> Self {
        AsmacConfig {
            model_dir: PathBuf::from("model"),
            embed_dim: 300,
            kernel_size: 20,
            channels: vec![
                String::from("A"),
                String::from("TU"),
                String::from("G"),
                String::from("C"),
            ],
            nominal_lengths: default_nominal_lengths(),
        }
    }
}

fn default_nominal_lengths() -> BTreeMap<String, usize> {
    ModelType::ALL
        .iter()
        .map(|mt| (mt.label().to_string(), mt.default_nominal_length()))
        .collect()
}

fn merge_nominal_lengths<'de, D>(deserializer: D) -> Result<BTreeMap<String, usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, usize>::deserialize(deserializer)?;
    let mut lengths = default_nominal_lengths();
    lengths.extend(overrides);
    Ok(lengths)
}

impl AsmacConfig {
    pub fn from_file(path: &Path) -> Result<Self, AsmacError> {
        let text = fs::read_to_string(path)?;
        let config: AsmacConfig = serde_json::from_str(&text)
            .map_err(|e| AsmacError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        debug!("Read configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AsmacError> {
        if self.embed_dim == 0 || self.kernel_size == 0 {
            return Err(AsmacError::Config(String::from(
                "embed_dim and kernel_size must be positive",
            )));
        }
        if self.channels.is_empty() || self.channels.iter().any(|c| c.is_empty()) {
            return Err(AsmacError::Config(String::from(
                "every alphabet channel needs at least one symbol",
            )));
        }
        let mut seen = HashSet::new();
        for symbol in self.channels.iter().flat_map(|c| c.chars()) {
            if !seen.insert(symbol) {
                return Err(AsmacError::Config(format!(
                    "symbol '{}' is mapped to more than one channel",
                    symbol
                )));
            }
        }
        let known = ModelType::labels();
        for label in self.nominal_lengths.keys() {
            if !known.contains(&label.as_str()) {
                return Err(AsmacError::Config(format!(
                    "nominal length given for unknown model '{}'",
                    label
                )));
            }
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Alphabet {
        Alphabet::new(&self.channels)
    }

    pub fn net_params(&self) -> NetParams {
        NetParams {
            embed_dim: self.embed_dim,
            alphabet_size: self.channels.len(),
            kernel_size: self.kernel_size,
        }
    }

    pub fn nominal_length(&self, model_type: ModelType) -> Option<usize> {
        self.nominal_lengths.get(model_type.label()).copied()
    }
}

/// Looks for a config file in the home directory, then in the current directory.
pub fn find_asmac_config(home: Option<&Path>, cwd: Option<&Path>) -> Option<PathBuf> {
    [home, cwd]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// An explicit path wins; otherwise a discovered config file is used, and failing that the
/// built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AsmacConfig, AsmacError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let home = std::env::var_os("HOME").map(PathBuf::from);
            let cwd = std::env::current_dir().ok();
            find_asmac_config(home.as_deref(), cwd.as_deref())
        }
    };
    match path {
        Some(p) => {
            info!("Using configuration file {}", p.display());
            AsmacConfig::from_file(&p)
        }
        None => Ok(AsmacConfig::default()),
    }
}
