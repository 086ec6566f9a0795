//! Common types for the scan module

use serde::Serialize;
use std::fmt;

/// Default entropy threshold below which text is labeled "High" likelihood.
///
/// A rough, unvalidated heuristic carried over for compatibility: machine
/// text tends toward lower word entropy. Tunable via [`ScanOptions`].
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 4.5;

/// Default cap on the detailed occurrence list in a report
pub const DEFAULT_DETAIL_LIMIT: usize = 10;

/// Default number of top word tokens reported
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Options for watermark scanning
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Entropy threshold for the High/Low likelihood label
    pub entropy_threshold: f64,
    /// Maximum number of occurrences carried in the detail list
    pub detail_limit: usize,
    /// Number of most-frequent word tokens to report
    pub top_words: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            detail_limit: DEFAULT_DETAIL_LIMIT,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl ScanOptions {
    /// Create options with a custom entropy threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            entropy_threshold: threshold,
            ..Default::default()
        }
    }
}

/// Likelihood label derived from the entropy heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AiLikelihood {
    High,
    Low,
}

impl fmt::Display for AiLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A single watermark-candidate code point found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatermarkOccurrence {
    /// The code point itself
    pub ch: char,
    /// Offset in characters from the start of the text
    pub char_offset: usize,
    /// Offset in bytes from the start of the text
    pub byte_offset: usize,
    /// Resolved Unicode name, or "Unknown"
    pub name: &'static str,
}

impl WatermarkOccurrence {
    /// Formatted code point, e.g. `U+200B`
    pub fn code_point(&self) -> String {
        format!("U+{:04X}", self.ch as u32)
    }
}

impl fmt::Display for WatermarkOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}: {}) at char {}",
            self.ch,
            self.code_point(),
            self.name,
            self.char_offset
        )
    }
}

/// Result of a single scan invocation
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Detailed occurrences, first-occurrence order, capped at the detail limit
    pub occurrences: Vec<WatermarkOccurrence>,
    /// Total number of watermark candidates in the text (not capped)
    pub total_occurrences: usize,
    /// Number of word tokens seen by the heuristic pass
    pub word_count: usize,
    /// Shannon entropy of the word-frequency distribution
    pub entropy: f64,
    /// Likelihood label derived from the entropy threshold
    pub likelihood: AiLikelihood,
    /// Most frequent lowercase tokens, ties broken by first appearance
    pub top_words: Vec<String>,
}

impl ScanReport {
    /// Neutral report for empty input
    pub fn empty() -> Self {
        Self {
            occurrences: Vec::new(),
            total_occurrences: 0,
            word_count: 0,
            entropy: 0.0,
            likelihood: AiLikelihood::High,
            top_words: Vec::new(),
        }
    }
}
