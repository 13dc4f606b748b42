// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::{Itertools, MinMaxResult};

use crate::seq::record::SeqRecord;

// A sequence file is an ordered, non-empty list of records together with the length range seen
// while reading it.

#[derive(Debug, Clone)]
pub struct SeqFile {
    records: Vec<SeqRecord>,
    min_len: usize,
    max_len: usize,
}

impl SeqFile {
    /// Returns None for an empty list: there is no length range to report.
    pub fn new(records: Vec<SeqRecord>) -> Option<Self> {
        let (min_len, max_len) = match records.iter().map(SeqRecord::len).minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(len) => (len, len),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        Some(SeqFile {
            records,
            min_len,
            max_len,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    pub fn headers(&self) -> Vec<String> {
        self.records.iter().map(|r| r.header.clone()).collect()
    }

    pub fn sequences(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.sequence.as_str()).collect()
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Upper median for an even number of records.
    pub fn median_len(&self) -> usize {
        let lens: Vec<usize> = self.records.iter().map(SeqRecord::len).sorted().collect();
        lens[lens.len() / 2]
    }
}
