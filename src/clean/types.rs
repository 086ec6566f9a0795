//! Common types for the clean module

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::charset::WatermarkSet;

/// Cleaning error types
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;

/// Number of spaces a tab expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TabWidth {
    #[value(name = "2")]
    Two,
    #[default]
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
}

impl TabWidth {
    /// Expansion width in spaces
    pub fn count(&self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Parse from a numeric width; only 2, 4 and 8 are valid
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            8 => Some(Self::Eight),
            _ => None,
        }
    }
}

/// A custom substitution rule
///
/// The pattern compiles as a regular expression at clean time; the
/// replacement supports `$group` expansion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub replacement: String,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Named pattern presets for the custom rule slot
///
/// Pure data: each preset maps to an optional [`PatternRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// No custom pattern
    #[default]
    None,
    /// Curated three-codepoint subset (NNBSP, ZWSP, ZWNBSP)
    Narrow,
    /// The full watermark reference set
    AllInvisible,
}

impl Preset {
    /// The pattern rule this preset stands for, if any
    pub fn rule(&self, set: &WatermarkSet) -> Option<PatternRule> {
        match self {
            Self::None => None,
            Self::Narrow => Some(PatternRule::new(
                WatermarkSet::narrow().to_char_class(),
                " ",
            )),
            Self::AllInvisible => Some(PatternRule::new(set.to_char_class(), " ")),
        }
    }

    /// Parse a preset name as used in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "narrow" => Some(Self::Narrow),
            "all-invisible" => Some(Self::AllInvisible),
            _ => None,
        }
    }
}

/// Cleaning options, all independently toggleable
///
/// Immutable during a single clean invocation. Note that `strip_tabs` and
/// `expand_tabs` may both be enabled; rule order means strip runs first and
/// expansion finds nothing left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Replace every maximal space/tab/newline run with a single space
    pub collapse_whitespace: bool,
    /// Delete all tab characters
    pub strip_tabs: bool,
    /// Replace each tab with the given number of spaces
    pub expand_tabs: Option<TabWidth>,
    /// Replace every maximal newline run with a single newline
    pub collapse_blank_lines: bool,
    /// Strip leading/trailing whitespace from each line
    pub trim_lines: bool,
    /// Replace every watermark-set member with a single space
    pub strip_watermarks: bool,
    /// Custom substitution applied last
    pub pattern: Option<PatternRule>,
}

impl CleanOptions {
    pub fn builder() -> CleanOptionsBuilder {
        CleanOptionsBuilder::default()
    }

    /// True when no rule is enabled (clean would be the identity)
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Builder for [`CleanOptions`]
#[derive(Debug, Clone, Default)]
pub struct CleanOptionsBuilder {
    options: CleanOptions,
}

impl CleanOptionsBuilder {
    pub fn collapse_whitespace(mut self, enabled: bool) -> Self {
        self.options.collapse_whitespace = enabled;
        self
    }

    pub fn strip_tabs(mut self, enabled: bool) -> Self {
        self.options.strip_tabs = enabled;
        self
    }

    pub fn expand_tabs(mut self, width: TabWidth) -> Self {
        self.options.expand_tabs = Some(width);
        self
    }

    pub fn collapse_blank_lines(mut self, enabled: bool) -> Self {
        self.options.collapse_blank_lines = enabled;
        self
    }

    pub fn trim_lines(mut self, enabled: bool) -> Self {
        self.options.trim_lines = enabled;
        self
    }

    pub fn strip_watermarks(mut self, enabled: bool) -> Self {
        self.options.strip_watermarks = enabled;
        self
    }

    pub fn pattern(mut self, rule: PatternRule) -> Self {
        self.options.pattern = Some(rule);
        self
    }

    pub fn preset(mut self, preset: Preset, set: &WatermarkSet) -> Self {
        self.options.pattern = preset.rule(set);
        self
    }

    pub fn build(self) -> CleanOptions {
        self.options
    }
}
