// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// One-hot encoding of nucleotide sequences.
//
// An encoded sequence is an `Array2<f32>` with one row per alphabet channel and one column per
// sequence position. Several symbols may share a channel: by default T and U both light up
// channel 1, so DNA and RNA spellings of the same molecule encode identically.

use std::collections::HashMap;

use ndarray::Array2;

use crate::errors::AsmacError;

#[derive(Debug, Clone)]
pub struct Alphabet {
    channel_of: HashMap<char, usize>,
    size: usize,
}

impl Alphabet {
    /// Builds an alphabet from the symbols of each channel, in channel order.
    pub fn new<S: AsRef<str>>(channels: &[S]) -> Self {
        let mut channel_of = HashMap::new();
        for (idx, symbols) in channels.iter().enumerate() {
            for c in symbols.as_ref().chars() {
                channel_of.entry(c).or_insert(idx);
            }
        }
        Alphabet {
            channel_of,
            size: channels.len(),
        }
    }

    /// Number of one-hot channels.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn channel(&self, symbol: char) -> Option<usize> {
        self.channel_of.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.channel_of.contains_key(&symbol)
    }

    /// First symbol of `seq` that is not part of the alphabet, if any.
    pub fn first_invalid(&self, seq: &str) -> Option<char> {
        seq.chars().find(|c| !self.contains(*c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(&["A", "TU", "G", "C"])
    }
}

pub fn one_hot(seq: &str, alphabet: &Alphabet) -> Result<Array2<f32>, AsmacError> {
    let mut encoded = Array2::<f32>::zeros((alphabet.size(), seq.chars().count()));
    for (pos, symbol) in seq.chars().enumerate() {
        let channel = alphabet.channel(symbol).ok_or_else(|| {
            AsmacError::Format(format!("cannot encode symbol '{}'", symbol))
        })?;
        encoded[[channel, pos]] = 1.0;
    }
    Ok(encoded)
}

/// Encodes every sequence independently; lengths may differ.
pub fn one_hot_batch<S: AsRef<str>>(
    seqs: &[S],
    alphabet: &Alphabet,
) -> Result<Vec<Array2<f32>>, AsmacError> {
    seqs.iter().map(|s| one_hot(s.as_ref(), alphabet)).collect()
}
