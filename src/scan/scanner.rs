//! Watermark occurrence scanning and report assembly

use std::collections::HashMap;

use tracing::debug;

use super::entropy::{shannon_entropy, tokenize};
use super::types::{AiLikelihood, ScanOptions, ScanReport, WatermarkOccurrence};
use crate::charset::{unicode_name, WatermarkSet};

/// Scanner over an injectable watermark set
///
/// Stateless apart from its configuration; `scan` is read-only over the
/// text it is given and safe to run on a worker thread.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    set: WatermarkSet,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(set: WatermarkSet, options: ScanOptions) -> Self {
        Self { set, options }
    }

    pub fn with_set(set: WatermarkSet) -> Self {
        Self {
            set,
            options: ScanOptions::default(),
        }
    }

    pub fn set(&self) -> &WatermarkSet {
        &self.set
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a text buffer and assemble a report
    ///
    /// Two independent passes: occurrence enumeration in text order, then
    /// the word-entropy heuristic. Total over the empty string.
    pub fn scan(&self, text: &str) -> ScanReport {
        if text.is_empty() {
            return ScanReport::empty();
        }

        // Pass 1: watermark occurrences in first-occurrence order
        let mut occurrences = Vec::new();
        let mut total_occurrences = 0usize;
        for (char_offset, (byte_offset, c)) in text.char_indices().enumerate() {
            if self.set.contains(c) {
                total_occurrences += 1;
                if occurrences.len() < self.options.detail_limit {
                    occurrences.push(WatermarkOccurrence {
                        ch: c,
                        char_offset,
                        byte_offset,
                        name: unicode_name(c),
                    });
                }
            }
        }

        // Pass 2: word-frequency entropy and top tokens
        let tokens = tokenize(text);
        let word_count = tokens.len();
        let mut frequencies: HashMap<String, (usize, usize)> = HashMap::new();
        for (index, token) in tokens.into_iter().enumerate() {
            let entry = frequencies.entry(token).or_insert((0, index));
            entry.0 += 1;
        }

        let counts: Vec<usize> = frequencies.values().map(|(count, _)| *count).collect();
        let entropy = shannon_entropy(&counts);
        let likelihood = if entropy < self.options.entropy_threshold {
            AiLikelihood::High
        } else {
            AiLikelihood::Low
        };

        let mut ranked: Vec<(String, usize, usize)> = frequencies
            .into_iter()
            .map(|(token, (count, first))| (token, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        let top_words = ranked
            .into_iter()
            .take(self.options.top_words)
            .map(|(token, _, _)| token)
            .collect();

        debug!(
            total_occurrences,
            word_count, entropy, "scan complete"
        );

        ScanReport {
            occurrences,
            total_occurrences,
            word_count,
            entropy,
            likelihood,
            top_words,
        }
    }
}
