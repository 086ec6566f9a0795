//! Session: the single owner of the text buffer and its history
//!
//! Composes the renderer, scanner, cleaning pipeline and history store per
//! user action. Everything below this layer is a pure function over text
//! it does not retain; nothing here requires locking because there is no
//! parallel writer.

use tracing::debug;

use crate::charset::{TextStats, WatermarkSet};
use crate::clean::{clean, CleanOptions, Result as CleanResult};
use crate::history::HistoryStore;
use crate::render::render_visible;
use crate::scan::{ScanOptions, ScanReport, Scanner};

/// Owner of the current text buffer, history and active configuration
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    history: HistoryStore,
    set: WatermarkSet,
    scan_options: ScanOptions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom watermark set and scan options
    pub fn with_config(set: WatermarkSet, scan_options: ScanOptions) -> Self {
        Self {
            set,
            scan_options,
            ..Self::default()
        }
    }

    /// Replace the current text buffer; history is kept
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn watermark_set(&self) -> &WatermarkSet {
        &self.set
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Render the buffer with visible whitespace and watermark markers
    pub fn detect(&self) -> String {
        render_visible(&self.text, &self.set)
    }

    /// Scan the buffer synchronously
    pub fn scan(&self) -> ScanReport {
        Scanner::new(self.set.clone(), self.scan_options).scan(&self.text)
    }

    /// A scanner configured like this session, for off-thread scanning
    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.set.clone(), self.scan_options)
    }

    /// Whitespace statistics over the buffer
    pub fn stats(&self) -> TextStats {
        TextStats::compute(&self.text, &self.set)
    }

    /// Clean the buffer in place
    ///
    /// On success the pre-clean text is recorded into history and the
    /// cleaned text adopted. On error nothing changes: not the buffer,
    /// not the history.
    pub fn clean(&mut self, options: &CleanOptions) -> CleanResult<()> {
        let cleaned = clean(&self.text, options, &self.set)?;
        self.history.record(self.text.as_str());
        debug!(before = self.text.len(), after = cleaned.len(), "buffer cleaned");
        self.text = cleaned;
        Ok(())
    }

    /// Restore the previous snapshot into the buffer
    pub fn undo(&mut self) -> Option<&str> {
        let snapshot = self.history.undo()?.to_owned();
        self.text = snapshot;
        Some(&self.text)
    }

    /// Restore the next snapshot into the buffer
    pub fn redo(&mut self) -> Option<&str> {
        let snapshot = self.history.redo()?.to_owned();
        self.text = snapshot;
        Some(&self.text)
    }

    /// Empty the buffer and reset history
    pub fn clear(&mut self) {
        self.text.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::PatternRule;

    // ============ TC SE-001: Clean records the pre-clean snapshot ============

    #[test]
    fn test_se001_clean_adopts_output() {
        let mut session = Session::new();
        session.set_text("a  b");
        let options = CleanOptions::builder().collapse_whitespace(true).build();
        session.clean(&options).unwrap();
        assert_eq!(session.text(), "a b");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().current(), Some("a  b"));
    }

    #[test]
    fn test_se001_failed_clean_changes_nothing() {
        let mut session = Session::new();
        session.set_text("a  b");
        let options = CleanOptions::builder()
            .pattern(PatternRule::new("(", " "))
            .build();
        assert!(session.clean(&options).is_err());
        assert_eq!(session.text(), "a  b");
        assert!(session.history().is_empty());
    }

    // ============ TC SE-002: Undo/redo restore the buffer ============

    #[test]
    fn test_se002_undo_restores_pre_clean_text() {
        let mut session = Session::new();
        session.set_text("one  two");
        let options = CleanOptions::builder().collapse_whitespace(true).build();
        session.clean(&options).unwrap();
        session.set_text("three\tfour");
        session.clean(&CleanOptions::builder().strip_tabs(true).build()).unwrap();

        assert_eq!(session.undo(), Some("one  two"));
        assert_eq!(session.text(), "one  two");
        assert_eq!(session.redo(), Some("three\tfour"));
    }

    #[test]
    fn test_se002_exhausted_undo_keeps_buffer() {
        let mut session = Session::new();
        session.set_text("text");
        assert_eq!(session.undo(), None);
        assert_eq!(session.text(), "text");
    }

    // ============ TC SE-003: Detect, scan, stats over the buffer ============

    #[test]
    fn test_se003_detect_renders_buffer() {
        let mut session = Session::new();
        session.set_text("a b");
        assert_eq!(session.detect(), "a·b");
    }

    #[test]
    fn test_se003_scan_counts_buffer_watermarks() {
        let mut session = Session::new();
        session.set_text("x\u{200B}y\u{202F}z");
        let report = session.scan();
        assert_eq!(report.total_occurrences, 2);
    }

    #[test]
    fn test_se003_stats() {
        let mut session = Session::new();
        session.set_text("a b\tc");
        let stats = session.stats();
        assert_eq!(stats.spaces, 1);
        assert_eq!(stats.tabs, 1);
    }

    // ============ TC SE-004: Clear ============

    #[test]
    fn test_se004_clear_empties_buffer_and_history() {
        let mut session = Session::new();
        session.set_text("a  b");
        session.clean(&CleanOptions::builder().collapse_whitespace(true).build()).unwrap();
        session.clear();
        assert!(session.is_empty());
        assert!(session.history().is_empty());
    }
}
