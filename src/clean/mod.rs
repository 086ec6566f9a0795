//! Ordered cleaning pipeline for whitespace and watermark removal
//!
//! Applies enabled rules in a fixed order over the input text. The order is
//! load-bearing: later rules see the output of earlier ones.

mod pipeline;
mod types;

pub use pipeline::clean;
pub use types::{
    CleanError, CleanOptions, CleanOptionsBuilder, PatternRule, Preset, Result, TabWidth,
};
