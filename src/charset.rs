//! Character classification against a watermark reference set
//!
//! # Overview
//!
//! Maps each code point to a small category set (ordinary, space, tab,
//! newline, watermark candidate). The watermark reference set is injectable
//! configuration, not a hard-coded table, so presets and config files can
//! swap in different subsets without touching the classifier.

use serde::Serialize;

/// Default watermark-candidate code points.
///
/// Zero-width and rare spacing characters sometimes inserted by generative
/// text tools, plus the em/en dashes they overuse.
pub const DEFAULT_WATERMARK_CHARS: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{202F}', // narrow no-break space
    '\u{00A0}', // no-break space
    '\u{2060}', // word joiner
    '\u{FEFF}', // zero width no-break space (BOM)
    '\u{2014}', // em dash
    '\u{2013}', // en dash
];

/// Curated subset targeting the three code points most often reported in
/// watermarked chat output.
pub const NARROW_WATERMARK_CHARS: &[char] = &['\u{202F}', '\u{200B}', '\u{FEFF}'];

/// Category of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Ordinary,
    Space,
    Tab,
    Newline,
    Watermark,
}

/// The injectable set of watermark-candidate code points
///
/// Iteration order is the canonical (listed) order, which keeps derived
/// regex character classes and the `info` listing deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkSet {
    chars: Vec<char>,
}

impl Default for WatermarkSet {
    fn default() -> Self {
        Self::new(DEFAULT_WATERMARK_CHARS)
    }
}

impl WatermarkSet {
    /// Create a set from an explicit list of code points
    pub fn new(chars: &[char]) -> Self {
        Self {
            chars: chars.to_vec(),
        }
    }

    /// The curated three-codepoint subset used by the "narrow" preset
    pub fn narrow() -> Self {
        Self::new(NARROW_WATERMARK_CHARS)
    }

    /// Membership test
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Members in canonical order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Render the set as a regex character class, e.g. `[\u{200B}\u{202F}]`
    pub fn to_char_class(&self) -> String {
        let mut class = String::from("[");
        for c in &self.chars {
            class.push_str(&format!("\\u{{{:04X}}}", *c as u32));
        }
        class.push(']');
        class
    }
}

/// Classify a single code point against a watermark set
///
/// Pure and total. Set membership is checked before the whitespace cases so
/// members that are themselves spacing characters (U+00A0, U+202F) classify
/// as watermark candidates, not spaces.
pub fn classify(c: char, set: &WatermarkSet) -> CharClass {
    if set.contains(c) {
        return CharClass::Watermark;
    }
    match c {
        ' ' => CharClass::Space,
        '\t' => CharClass::Tab,
        '\n' => CharClass::Newline,
        _ => CharClass::Ordinary,
    }
}

/// Resolve the Unicode name of a code point
///
/// Covers the watermark candidates this tool ships knowledge of plus the
/// plain whitespace characters; anything else resolves to `"Unknown"`.
pub fn unicode_name(c: char) -> &'static str {
    match c {
        '\u{200B}' => "ZERO WIDTH SPACE",
        '\u{200C}' => "ZERO WIDTH NON-JOINER",
        '\u{200D}' => "ZERO WIDTH JOINER",
        '\u{202F}' => "NARROW NO-BREAK SPACE",
        '\u{00A0}' => "NO-BREAK SPACE",
        '\u{2060}' => "WORD JOINER",
        '\u{FEFF}' => "ZERO WIDTH NO-BREAK SPACE",
        '\u{2014}' => "EM DASH",
        '\u{2013}' => "EN DASH",
        ' ' => "SPACE",
        '\t' => "CHARACTER TABULATION",
        '\n' => "LINE FEED",
        _ => "Unknown",
    }
}

/// Per-class character counts for a text buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub chars: usize,
    pub spaces: usize,
    pub tabs: usize,
    pub newlines: usize,
    pub watermarks: usize,
}

impl TextStats {
    /// Count character classes in a single pass
    pub fn compute(text: &str, set: &WatermarkSet) -> Self {
        let mut stats = Self::default();
        for c in text.chars() {
            stats.chars += 1;
            match classify(c, set) {
                CharClass::Space => stats.spaces += 1,
                CharClass::Tab => stats.tabs += 1,
                CharClass::Newline => stats.newlines += 1,
                CharClass::Watermark => stats.watermarks += 1,
                CharClass::Ordinary => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ TC CS-001: Basic classification ============

    #[test]
    fn test_cs001_classify_whitespace() {
        let set = WatermarkSet::default();
        assert_eq!(classify(' ', &set), CharClass::Space);
        assert_eq!(classify('\t', &set), CharClass::Tab);
        assert_eq!(classify('\n', &set), CharClass::Newline);
        assert_eq!(classify('a', &set), CharClass::Ordinary);
    }

    #[test]
    fn test_cs001_classify_watermark() {
        let set = WatermarkSet::default();
        for c in DEFAULT_WATERMARK_CHARS {
            assert_eq!(classify(*c, &set), CharClass::Watermark);
        }
    }

    // ============ TC CS-002: Spacing watermark chars classify as watermark ============

    #[test]
    fn test_cs002_spacing_members_are_watermark() {
        let set = WatermarkSet::default();
        // NBSP and NNBSP are spaces in Unicode terms but must classify
        // as watermark candidates while in the set
        assert_eq!(classify('\u{00A0}', &set), CharClass::Watermark);
        assert_eq!(classify('\u{202F}', &set), CharClass::Watermark);
    }

    #[test]
    fn test_cs002_removed_member_falls_through() {
        let set = WatermarkSet::new(&['\u{200B}']);
        assert_eq!(classify('\u{202F}', &set), CharClass::Ordinary);
        assert_eq!(classify('\u{200B}', &set), CharClass::Watermark);
    }

    // ============ TC CS-003: Injectable set ============

    #[test]
    fn test_cs003_narrow_subset() {
        let narrow = WatermarkSet::narrow();
        assert_eq!(narrow.len(), 3);
        assert!(narrow.contains('\u{202F}'));
        assert!(narrow.contains('\u{200B}'));
        assert!(narrow.contains('\u{FEFF}'));
        assert!(!narrow.contains('\u{2014}'));
    }

    #[test]
    fn test_cs003_char_class_rendering() {
        let set = WatermarkSet::new(&['\u{200B}', '\u{202F}']);
        assert_eq!(set.to_char_class(), "[\\u{200B}\\u{202F}]");
    }

    // ============ TC CS-004: Unicode names ============

    #[test]
    fn test_cs004_known_names() {
        assert_eq!(unicode_name('\u{200B}'), "ZERO WIDTH SPACE");
        assert_eq!(unicode_name('\u{202F}'), "NARROW NO-BREAK SPACE");
        assert_eq!(unicode_name('\u{2014}'), "EM DASH");
    }

    #[test]
    fn test_cs004_unknown_fallback() {
        assert_eq!(unicode_name('a'), "Unknown");
        assert_eq!(unicode_name('\u{3000}'), "Unknown");
    }

    // ============ TC CS-005: Stats ============

    #[test]
    fn test_cs005_stats_single_pass() {
        let set = WatermarkSet::default();
        let stats = TextStats::compute("a b\tc\nd\u{200B}", &set);
        assert_eq!(stats.chars, 8);
        assert_eq!(stats.spaces, 1);
        assert_eq!(stats.tabs, 1);
        assert_eq!(stats.newlines, 1);
        assert_eq!(stats.watermarks, 1);
    }

    #[test]
    fn test_cs005_stats_empty() {
        let set = WatermarkSet::default();
        assert_eq!(TextStats::compute("", &set), TextStats::default());
    }
}
