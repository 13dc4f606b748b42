// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod config;
pub mod encoding;
pub mod errors;
pub mod inference;
pub mod model;
pub mod output;
pub mod paths;
pub mod runner;
pub mod seq;

use crate::errors::AsmacError;

pub fn run() -> Result<(), AsmacError> {
    runner::run()
}
