// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Reader for "paired" FastA: every record is exactly one header line followed by exactly one
// sequence line. Multi-line sequences are not supported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::encoding::Alphabet;
use crate::errors::AsmacError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_paired_fasta_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
) -> Result<SeqFile, AsmacError> {
    let path = path.as_ref();
    // The handle is dropped when this call returns, on the error paths too.
    let records = {
        let file = File::open(path)?;
        read_paired_fasta(BufReader::new(file), alphabet)?
    };
    SeqFile::new(records).ok_or_else(|| AsmacError::EmptyInput(path.to_path_buf()))
}

/// Reads header/sequence line pairs until an empty header line or the end of input.
pub fn read_paired_fasta<R: BufRead>(
    reader: R,
    alphabet: &Alphabet,
) -> Result<Vec<SeqRecord>, AsmacError> {
    let mut result: Vec<SeqRecord> = Vec::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next() {
        let header = line?;
        if header.is_empty() {
            break;
        }
        let sequence = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(AsmacError::Format(format!(
                    "Header '{}' is not followed by a sequence line",
                    header
                )))
            }
        };
        if sequence.is_empty() {
            return Err(AsmacError::Format(format!(
                "Empty sequence after header '{}'",
                header
            )));
        }
        if let Some(symbol) = alphabet.first_invalid(&sequence) {
            return Err(AsmacError::InvalidAlphabet { header, symbol });
        }
        debug!("read {} ({} nt)", header, sequence.len());
        result.push(SeqRecord { header, sequence });
    }

    Ok(result)
}
