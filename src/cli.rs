//! Command-line interface definitions
//!
//! Argument structs only; the runners live in `main.rs`. An input path of
//! `-` reads standard input.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::clean::{Preset, TabWidth};

/// Inspect and clean invisible Unicode in text
#[derive(Debug, Parser)]
#[command(name = "textsweep", version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (default: ./textsweep.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render whitespace and watermark characters as visible glyphs
    Detect(DetectArgs),
    /// Scan for watermark characters and report the entropy heuristic
    Scan(ScanArgs),
    /// Apply cleaning rules to the text
    Clean(CleanArgs),
    /// Print whitespace statistics
    Stats(StatsArgs),
    /// Show the active watermark set and configuration
    Info,
}

#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Input file, or - for stdin
    pub input: PathBuf,

    /// Write the rendered text to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Input files, or - for stdin; multiple files scan in parallel
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Entropy threshold for the High/Low label
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Maximum number of occurrences listed in detail
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Input file, or - for stdin
    pub input: PathBuf,

    /// Write the cleaned text to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace every run of spaces, tabs and newlines with one space
    #[arg(long)]
    pub collapse_whitespace: bool,

    /// Delete all tab characters
    #[arg(long)]
    pub strip_tabs: bool,

    /// Replace each tab with this many spaces
    #[arg(long, value_name = "N")]
    pub expand_tabs: Option<TabWidth>,

    /// Replace every run of newlines with one newline
    #[arg(long)]
    pub collapse_blank_lines: bool,

    /// Strip leading and trailing whitespace from each line
    #[arg(long)]
    pub trim_lines: bool,

    /// Replace watermark characters with a single space
    #[arg(long)]
    pub strip_watermarks: bool,

    /// Custom regex pattern applied after the other rules
    #[arg(long)]
    pub pattern: Option<String>,

    /// Replacement for the custom pattern (supports $group expansion)
    #[arg(long, requires = "pattern")]
    pub replacement: Option<String>,

    /// Named pattern preset; an explicit --pattern wins
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Print the cleaned text with visible whitespace markers afterwards
    #[arg(long)]
    pub show_invisible: bool,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Input file, or - for stdin
    pub input: PathBuf,
}
