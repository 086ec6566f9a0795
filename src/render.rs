//! Visible rendering of whitespace and watermark candidates
//!
//! Substitutes visible glyphs for characters that would otherwise be
//! invisible: spaces, tabs, newlines and watermark-candidate code points.
//! The marker glyphs are disjoint from the default watermark set, so
//! rendering already-rendered text never double-substitutes.

use crate::charset::{classify, CharClass, WatermarkSet};

/// Marker for an ordinary space
pub const SPACE_MARKER: char = '\u{00B7}'; // ·
/// Marker for a tab
pub const TAB_MARKER: char = '\u{2192}'; // →
/// Marker for a newline; a real newline follows so lines still break
pub const NEWLINE_MARKER: char = '\u{00B6}'; // ¶
/// Marker for a narrow no-break space
pub const NNBSP_MARKER: char = '\u{203B}'; // ※
/// Marker for every other watermark-candidate code point
pub const WATERMARK_MARKER: char = '\u{25C6}'; // ◆

/// Render a text buffer with visible whitespace and watermark markers
///
/// One pass, character preserving: output length in characters never
/// shrinks (a newline expands to marker + newline). Empty input yields
/// empty output.
pub fn render_visible(text: &str, set: &WatermarkSet) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match classify(c, set) {
            CharClass::Space => out.push(SPACE_MARKER),
            CharClass::Tab => out.push(TAB_MARKER),
            CharClass::Newline => {
                out.push(NEWLINE_MARKER);
                out.push('\n');
            }
            CharClass::Watermark => {
                if c == '\u{202F}' {
                    out.push(NNBSP_MARKER);
                } else {
                    out.push(WATERMARK_MARKER);
                }
            }
            CharClass::Ordinary => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ TC RD-001: Whitespace substitution ============

    #[test]
    fn test_rd001_space_tab_newline() {
        let set = WatermarkSet::default();
        assert_eq!(render_visible("a b", &set), "a·b");
        assert_eq!(render_visible("a\tb", &set), "a→b");
        assert_eq!(render_visible("a\nb", &set), "a¶\nb");
    }

    // ============ TC RD-002: Watermark glyphs ============

    #[test]
    fn test_rd002_nnbsp_gets_reference_mark() {
        let set = WatermarkSet::default();
        assert_eq!(render_visible("a\u{202F}b", &set), "a※b");
    }

    #[test]
    fn test_rd002_other_candidates_get_diamond() {
        let set = WatermarkSet::default();
        for c in ['\u{200B}', '\u{200C}', '\u{200D}', '\u{00A0}', '\u{2060}', '\u{FEFF}', '\u{2014}', '\u{2013}'] {
            let input = format!("x{}y", c);
            assert_eq!(render_visible(&input, &set), "x◆y", "for U+{:04X}", c as u32);
        }
    }

    // ============ TC RD-003: Pass-through and edge cases ============

    #[test]
    fn test_rd003_ordinary_unchanged() {
        let set = WatermarkSet::default();
        assert_eq!(render_visible("héllo", &set), "héllo");
    }

    #[test]
    fn test_rd003_empty_input() {
        let set = WatermarkSet::default();
        assert_eq!(render_visible("", &set), "");
    }

    #[test]
    fn test_rd003_length_non_decreasing() {
        let set = WatermarkSet::default();
        let input = "a b\tc\nd\u{200B}";
        let rendered = render_visible(input, &set);
        assert!(rendered.chars().count() >= input.chars().count());
    }

    // ============ TC RD-004: Idempotence of the marker set ============

    #[test]
    fn test_rd004_double_render_keeps_markers() {
        let set = WatermarkSet::default();
        let once = render_visible("a b\u{200B}\u{202F}", &set);
        let twice = render_visible(&once, &set);
        // Markers are not set members, so they survive a second pass
        assert_eq!(twice, once);
    }

    #[test]
    fn test_rd004_glyphs_disjoint_from_default_set() {
        let set = WatermarkSet::default();
        for marker in [SPACE_MARKER, TAB_MARKER, NEWLINE_MARKER, NNBSP_MARKER, WATERMARK_MARKER] {
            assert!(!set.contains(marker), "marker U+{:04X} is in the set", marker as u32);
        }
    }
}
