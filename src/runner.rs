// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::path::{Path, PathBuf};

use log::{info, warn};

use clap::Parser;

use crate::config::{load_config, AsmacConfig};
use crate::encoding::one_hot_batch;
use crate::errors::AsmacError;
use crate::inference::compute_distances;
use crate::model::{load_model, ModelType};
use crate::output::write_distance_csv;
use crate::paths::{resolve_input, resolve_output};
use crate::seq::fasta::read_paired_fasta_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input file: alternating header and sequence lines
    #[arg(short, long)]
    input: PathBuf,

    /// Output .csv file (default: <input name>_distances.csv in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Model [16S-full|16S-V4|16S-V3-V4|23S-full|23S-V5]
    #[arg(short, long, default_value = "16S-full")]
    model: String,

    /// JSON configuration file (default: .asmacconfig in $HOME or the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the <model>.npy weights (overrides the configuration)
    #[arg(short = 'd', long = "model-dir")]
    model_dir: Option<PathBuf>,
}

/// One distance computation, as requested on the command line.
#[derive(Debug, Clone)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub model: String,
}

// True when `median` is less than half or more than twice `nominal`.
fn length_mismatch(nominal: usize, median: usize) -> bool {
    median * 2 < nominal || median > nominal * 2
}

fn warn_on_length_mismatch(model_type: ModelType, nominal: usize, median: usize) {
    if length_mismatch(nominal, median) {
        warn!(
            "median sequence length {} is far from the ~{} expected by {}",
            median, nominal, model_type
        );
    }
}

/// Runs the pipeline and returns the path of the written table. Nothing is written unless every
/// step succeeds.
pub fn execute(job: &Job, cwd: &Path, config: &AsmacConfig) -> Result<PathBuf, AsmacError> {
    let input_paths = resolve_input(&job.input)?;
    let output_paths = resolve_output(&job.output, cwd, &input_paths.default_output)?;
    info!(
        "input {} (in '{}'), output {}",
        input_paths.file_name,
        input_paths.dir.display(),
        output_paths.path.display()
    );

    let model_type: ModelType = job.model.parse()?;
    let nominal = config.nominal_length(model_type);
    match nominal {
        Some(len) => println!(
            "Using model: {}, expecting sequence length of ~{}",
            model_type, len
        ),
        None => println!("Using model: {}", model_type),
    }

    let alphabet = config.alphabet();
    let seq_file = read_paired_fasta_file(&job.input, &alphabet)?;
    println!(
        "{} sequences loaded. length range:[{}, {}]",
        seq_file.len(),
        seq_file.min_len(),
        seq_file.max_len()
    );
    if let Some(len) = nominal {
        warn_on_length_mismatch(model_type, len, seq_file.median_len());
    }
    let batch = one_hot_batch(&seq_file.sequences(), &alphabet)?;

    let net = load_model(model_type, &config.net_params(), &config.model_dir)?;
    println!("AsMac model loaded");

    println!("Computing embeddings for the sequences...");
    let (matrix, elapsed) = compute_distances(&net, seq_file.headers(), &batch)?;
    println!("Done!, cost {:.2} seconds", elapsed.as_secs_f64());

    write_distance_csv(&output_paths.path, &matrix)?;
    println!("Result saved in: {}", output_paths.path.display());

    Ok(output_paths.path)
}

pub fn run() -> Result<(), AsmacError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.model_dir {
        config.model_dir = dir;
    }

    let job = Job {
        input: cli.input,
        output: cli.output.unwrap_or_else(|| cwd.clone()),
        model: cli.model,
    };
    execute(&job, &cwd, &config)?;

    Ok(())
}
