//! textsweep - invisible-character inspector and text cleaner
//!
//! Reveals hidden whitespace and Unicode, scans text for the zero-width and
//! rare spacing characters some generative tools insert as watermarks, and
//! strips them with an ordered, undoable set of cleaning rules.
//!
//! The AI-likelihood signal reported by the scanner is a word-entropy
//! heuristic with a fixed threshold. It is illustrative only, not a trained
//! classifier.

pub mod charset;
pub mod clean;
pub mod cli;
pub mod config;
pub mod history;
pub mod render;
pub mod scan;
pub mod session;
pub mod worker;

pub use charset::{classify, unicode_name, CharClass, TextStats, WatermarkSet};
pub use clean::{
    clean, CleanError, CleanOptions, CleanOptionsBuilder, PatternRule, Preset, TabWidth,
};
pub use cli::{CleanArgs, Cli, Commands, DetectArgs, ScanArgs, StatsArgs};
pub use config::{CleanSection, Config, ScanSection};
pub use history::HistoryStore;
pub use render::render_visible;
pub use scan::{AiLikelihood, ScanOptions, ScanReport, Scanner, WatermarkOccurrence};
pub use session::Session;
pub use worker::{ScanDelivery, ScanWorker};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INPUT_NOT_FOUND: i32 = 2;
    pub const EMPTY_INPUT: i32 = 3;
}
