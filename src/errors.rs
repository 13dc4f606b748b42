// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum AsmacError {
    Io(io::Error),
    Csv(csv::Error),
    Format(String),
    Config(String),
    InvalidOutputFormat(PathBuf),
    InvalidAlphabet { header: String, symbol: char },
    UnsupportedModel(String),
    ArtifactLoad { path: PathBuf, reason: String },
    EmptyInput(PathBuf),
}

// These allow conversion to AsmacError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for AsmacError {
    fn from(e: io::Error) -> Self {
        AsmacError::Io(e)
    }
}

impl From<csv::Error> for AsmacError {
    fn from(e: csv::Error) -> Self {
        AsmacError::Csv(e)
    }
}

impl From<String> for AsmacError {
    fn from(s: String) -> Self {
        AsmacError::Format(s)
    }
}

impl fmt::Display for AsmacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsmacError::Io(e) => write!(f, "I/O error: {}", e),
            AsmacError::Csv(e) => write!(f, "CSV error: {}", e),
            AsmacError::Format(msg) => write!(f, "Format error: {}", msg),
            AsmacError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AsmacError::InvalidOutputFormat(path) => write!(
                f,
                "Invalid output format, csv required: {}",
                path.display()
            ),
            AsmacError::InvalidAlphabet { header, symbol } => write!(
                f,
                "Sequence '{}' has symbol '{}' other than {{A,T,U,C,G}}",
                header, symbol
            ),
            AsmacError::UnsupportedModel(label) => write!(
                f,
                "Unsupported sequence type '{}'. Please choose one from: {}",
                label,
                crate::model::ModelType::labels().join(", ")
            ),
            AsmacError::ArtifactLoad { path, reason } => write!(
                f,
                "Could not load model weights from {}: {}",
                path.display(),
                reason
            ),
            AsmacError::EmptyInput(path) => {
                write!(f, "No sequences found in {}", path.display())
            }
        }
    }
}

impl std::error::Error for AsmacError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AsmacError::Io(e) => Some(e),
            AsmacError::Csv(e) => Some(e),
            _ => None,
        }
    }
}
