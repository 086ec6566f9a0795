//! End-to-end session scenarios
//!
//! Exercises detect, scan, clean and the undo/redo history through the
//! public library surface.

use textsweep::{
    render_visible, CleanOptions, HistoryStore, PatternRule, Scanner, Session, TabWidth,
    WatermarkSet,
};

// TC-FLOW-001: Clean then inspect the result
#[test]
fn test_clean_collapse_whitespace_scenario() {
    let mut session = Session::new();
    session.set_text("hello   world\t\n\nfoo");

    let options = CleanOptions::builder().collapse_whitespace(true).build();
    session.clean(&options).unwrap();

    assert_eq!(session.text(), "hello world foo");
    assert_eq!(session.detect(), "hello·world·foo");
}

// TC-FLOW-002: Watermark stripping matches what the scan reported
#[test]
fn test_strip_watermarks_and_scan_agree() {
    let mut session = Session::new();
    session.set_text("para\u{200B}graph with\u{202F}marks");

    let report = session.scan();
    assert_eq!(report.total_occurrences, 2);

    let options = CleanOptions::builder().strip_watermarks(true).build();
    session.clean(&options).unwrap();

    assert_eq!(session.text(), "para graph with marks");
    assert_eq!(session.scan().total_occurrences, 0);
}

// TC-FLOW-003: Pipeline ordering with strip and expand both enabled
#[test]
fn test_strip_tabs_wins_over_expand() {
    let mut session = Session::new();
    session.set_text("a\t\tb");

    let options = CleanOptions::builder()
        .strip_tabs(true)
        .expand_tabs(TabWidth::Four)
        .build();
    session.clean(&options).unwrap();

    assert_eq!(session.text(), "ab");
}

// TC-FLOW-004: Custom pattern substitution
#[test]
fn test_custom_pattern_scenario() {
    let mut session = Session::new();
    session.set_text("aaa bb aaaa");

    let options = CleanOptions::builder()
        .pattern(PatternRule::new("a+", "b"))
        .build();
    session.clean(&options).unwrap();

    assert_eq!(session.text(), "b bb b");
}

// TC-FLOW-005: An invalid pattern aborts atomically
#[test]
fn test_invalid_pattern_leaves_everything_untouched() {
    let mut session = Session::new();
    session.set_text("original   text");

    // A valid clean first so there is history to protect
    session
        .clean(&CleanOptions::builder().collapse_whitespace(true).build())
        .unwrap();
    let history_len = session.history().len();

    let bad = CleanOptions::builder()
        .trim_lines(true)
        .pattern(PatternRule::new("[unterminated", " "))
        .build();
    assert!(session.clean(&bad).is_err());

    assert_eq!(session.text(), "original text");
    assert_eq!(session.history().len(), history_len);
}

// TC-FLOW-006: Undo and redo across multiple cleans
#[test]
fn test_undo_redo_round_trip() {
    let mut session = Session::new();
    session.set_text("one  two");
    session
        .clean(&CleanOptions::builder().collapse_whitespace(true).build())
        .unwrap();

    session.set_text("a\tb");
    session
        .clean(&CleanOptions::builder().strip_tabs(true).build())
        .unwrap();
    assert_eq!(session.text(), "ab");

    assert_eq!(session.undo(), Some("one  two"));
    assert_eq!(session.redo(), Some("a\tb"));
    assert_eq!(session.redo(), None);
}

// TC-FLOW-007: Recording after undo discards the redo branch
#[test]
fn test_history_branch_truncation() {
    let mut history = HistoryStore::new();
    history.record("A");
    history.record("B");
    history.undo();
    history.record("C");

    assert_eq!(history.redo(), None);
    assert_eq!(history.current(), Some("C"));
}

// TC-FLOW-008: Scan count equals set membership for arbitrary input
#[test]
fn test_scan_count_matches_membership() {
    let set = WatermarkSet::default();
    let scanner = Scanner::with_set(set.clone());
    let texts = [
        "plain ascii text".to_string(),
        "\u{200B}\u{200C}\u{200D}\u{202F}\u{00A0}\u{2060}\u{FEFF}\u{2014}\u{2013}".to_string(),
        "mixed \u{200B} content \u{2014} here".to_string(),
        "".to_string(),
    ];
    for text in texts {
        let expected = text.chars().filter(|c| set.contains(*c)).count();
        assert_eq!(scanner.scan(&text).total_occurrences, expected);
    }
}

// TC-FLOW-009: Rendered output re-renders without marker corruption
#[test]
fn test_render_marker_pass_through() {
    let set = WatermarkSet::default();
    let once = render_visible("dash\u{2014}and\u{200B}space here", &set);
    let twice = render_visible(&once, &set);
    assert_eq!(once, twice);
}

// TC-FLOW-010: A narrowed watermark set changes every dependent operation
#[test]
fn test_injected_set_flows_through_session() {
    let mut session = Session::with_config(WatermarkSet::narrow(), Default::default());
    session.set_text("a\u{2014}b\u{200B}c");

    // The em dash is outside the narrow set
    assert_eq!(session.scan().total_occurrences, 1);
    assert_eq!(session.stats().watermarks, 1);
    assert_eq!(session.detect(), "a\u{2014}b◆c");

    session
        .clean(&CleanOptions::builder().strip_watermarks(true).build())
        .unwrap();
    assert_eq!(session.text(), "a\u{2014}b c");
}

// TC-FLOW-011: Clear wipes the buffer and the history
#[test]
fn test_clear_scenario() {
    let mut session = Session::new();
    session.set_text("x  y");
    session
        .clean(&CleanOptions::builder().collapse_whitespace(true).build())
        .unwrap();

    session.clear();
    assert!(session.is_empty());
    assert_eq!(session.undo(), None);
    assert_eq!(session.scan().total_occurrences, 0);
}
