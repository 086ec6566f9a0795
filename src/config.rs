//! TOML configuration with CLI-wins merge semantics
//!
//! Configuration is looked up at `./textsweep.toml`, then
//! `<user config dir>/textsweep/config.toml`. Every field is optional;
//! command-line flags take precedence over file values.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::charset::WatermarkSet;
use crate::clean::{CleanOptions, PatternRule, Preset, TabWidth};
use crate::scan::ScanOptions;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub clean: CleanSection,
}

/// `[scan]` section: heuristic tuning and the watermark reference set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanSection {
    /// Override for the entropy threshold
    pub entropy_threshold: Option<f64>,
    /// Override for the occurrence detail cap
    pub detail_limit: Option<usize>,
    /// Override for the number of reported top words
    pub top_words: Option<usize>,
    /// Replacement watermark set as `"U+XXXX"` strings
    pub watermark_chars: Option<Vec<String>>,
}

/// `[clean]` section: default rule toggles and an optional default pattern
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanSection {
    #[serde(default)]
    pub collapse_whitespace: bool,
    #[serde(default)]
    pub strip_tabs: bool,
    /// Tab expansion width; 2, 4 or 8
    pub expand_tabs: Option<usize>,
    #[serde(default)]
    pub collapse_blank_lines: bool,
    #[serde(default)]
    pub trim_lines: bool,
    #[serde(default)]
    pub strip_watermarks: bool,
    pub pattern: Option<String>,
    pub replacement: Option<String>,
    /// Preset name: "none", "narrow" or "all-invisible"
    pub preset: Option<String>,
}

impl Config {
    /// Local config file name
    pub fn local_path() -> PathBuf {
        PathBuf::from("textsweep.toml")
    }

    /// Per-user config file location, if the platform has one
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textsweep/config.toml"))
    }

    /// Load from the default locations; absent files yield the default
    pub fn load() -> Result<Self> {
        let local = Self::local_path();
        if local.exists() {
            return Self::load_from_path(&local);
        }
        if let Some(user) = Self::user_path() {
            if user.exists() {
                return Self::load_from_path(&user);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Scan options with this config's overrides applied
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        ScanOptions {
            entropy_threshold: self
                .scan
                .entropy_threshold
                .unwrap_or(defaults.entropy_threshold),
            detail_limit: self.scan.detail_limit.unwrap_or(defaults.detail_limit),
            top_words: self.scan.top_words.unwrap_or(defaults.top_words),
        }
    }

    /// The active watermark set, either the default or the configured one
    pub fn watermark_set(&self) -> Result<WatermarkSet> {
        match &self.scan.watermark_chars {
            Some(specs) => {
                let mut chars = Vec::with_capacity(specs.len());
                for spec in specs {
                    chars.push(parse_codepoint(spec)?);
                }
                Ok(WatermarkSet::new(&chars))
            }
            None => Ok(WatermarkSet::default()),
        }
    }

    /// Default clean options from the `[clean]` section
    pub fn clean_options(&self, set: &WatermarkSet) -> Result<CleanOptions> {
        let section = &self.clean;

        let expand_tabs = match section.expand_tabs {
            Some(count) => match TabWidth::from_count(count) {
                Some(width) => Some(width),
                None => bail!("expand_tabs must be 2, 4 or 8, got {}", count),
            },
            None => None,
        };

        let pattern = if let Some(p) = &section.pattern {
            Some(PatternRule::new(
                p.clone(),
                section.replacement.clone().unwrap_or_default(),
            ))
        } else if let Some(name) = &section.preset {
            match Preset::from_name(name) {
                Some(preset) => preset.rule(set),
                None => bail!("unknown preset {:?} in config", name),
            }
        } else {
            None
        };

        Ok(CleanOptions {
            collapse_whitespace: section.collapse_whitespace,
            strip_tabs: section.strip_tabs,
            expand_tabs,
            collapse_blank_lines: section.collapse_blank_lines,
            trim_lines: section.trim_lines,
            strip_watermarks: section.strip_watermarks,
            pattern,
        })
    }
}

/// Parse a `"U+XXXX"` code point spec
fn parse_codepoint(spec: &str) -> Result<char> {
    let hex = spec
        .strip_prefix("U+")
        .or_else(|| spec.strip_prefix("u+"))
        .with_context(|| format!("code point {:?} must start with U+", spec))?;
    let value = u32::from_str_radix(hex, 16)
        .with_context(|| format!("code point {:?} is not valid hex", spec))?;
    char::from_u32(value).with_context(|| format!("{:?} is not a valid code point", spec))
}
