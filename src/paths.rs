// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use crate::errors::AsmacError;

pub const OUTPUT_SUFFIX: &str = "_distances.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub file_name: String,
    // File name up to the first '.', so "seqs.v2.fa" gives "seqs".
    pub base_name: String,
    pub dir: PathBuf,
    pub default_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub file_name: String,
    pub base_name: String,
    pub path: PathBuf,
}

fn base_name(file_name: &str) -> String {
    file_name.split('.').next().unwrap_or_default().to_string()
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

pub fn resolve_input(input: &Path) -> Result<InputPaths, AsmacError> {
    let file_name = file_name_of(input).ok_or_else(|| {
        AsmacError::Format(format!("Input path {} has no file name", input.display()))
    })?;
    let base_name = base_name(&file_name);
    let dir = input.parent().map(Path::to_path_buf).unwrap_or_default();
    let default_output = format!("{}{}", base_name, OUTPUT_SUFFIX);

    Ok(InputPaths {
        file_name,
        base_name,
        dir,
        default_output,
    })
}

/// Resolves where the distance table goes. The working directory itself receives the default
/// output name; anything else must name a .csv file.
pub fn resolve_output(
    output: &Path,
    cwd: &Path,
    default_output: &str,
) -> Result<OutputPaths, AsmacError> {
    let path = if output == cwd {
        cwd.join(default_output)
    } else if file_name_of(output).is_some_and(|name| name.ends_with(".csv")) {
        output.to_path_buf()
    } else {
        return Err(AsmacError::InvalidOutputFormat(output.to_path_buf()));
    };
    // Both branches above guarantee a file name.
    let file_name = file_name_of(&path).unwrap_or_default();
    let base_name = base_name(&file_name);

    Ok(OutputPaths {
        file_name,
        base_name,
        path,
    })
}
