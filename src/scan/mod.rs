//! Watermark scanning and the entropy heuristic
//!
//! Two independent passes over an immutable text snapshot: occurrence
//! enumeration against the watermark reference set, and a word-frequency
//! entropy signal with a High/Low likelihood label. The scan is read-only
//! and safe to run off the interaction thread.

mod entropy;
mod scanner;
mod types;

pub use entropy::{shannon_entropy, tokenize};
pub use scanner::Scanner;
pub use types::{AiLikelihood, ScanOptions, ScanReport, WatermarkOccurrence};
