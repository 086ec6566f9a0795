//! Rule application in fixed order

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::types::{CleanOptions, Result};
use crate::charset::WatermarkSet;

// The collapse rules use the literal space/tab/newline alphabet, not the
// full Unicode \s class, so watermark spacing characters are left for the
// dedicated strip rule.
static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n]+").expect("valid literal pattern"));
static RE_NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("valid literal pattern"));

/// Apply the enabled cleaning rules to a text buffer
///
/// Rules run in a fixed order; later rules see the output of earlier ones.
/// An invalid custom pattern aborts the whole clean: the error is returned
/// and no partial output escapes.
pub fn clean(text: &str, options: &CleanOptions, set: &WatermarkSet) -> Result<String> {
    // Compile the custom pattern first so a bad pattern fails before any
    // work is done
    let custom = match &options.pattern {
        Some(rule) => Some((Regex::new(&rule.pattern)?, rule.replacement.as_str())),
        None => None,
    };

    let mut text = Cow::Borrowed(text);

    // 1. Collapse whitespace runs to a single space
    if options.collapse_whitespace {
        text = Cow::Owned(RE_WHITESPACE_RUN.replace_all(&text, " ").into_owned());
    }

    // 2. Strip tabs
    if options.strip_tabs {
        text = Cow::Owned(text.replace('\t', ""));
    }

    // 3. Expand remaining tabs; with strip_tabs also enabled there are
    //    none left, and that ordering is part of the contract
    if let Some(width) = options.expand_tabs {
        text = Cow::Owned(text.replace('\t', &" ".repeat(width.count())));
    }

    // 4. Collapse newline runs to a single newline
    if options.collapse_blank_lines {
        text = Cow::Owned(RE_NEWLINE_RUN.replace_all(&text, "\n").into_owned());
    }

    // 5. Trim line edges
    if options.trim_lines {
        text = Cow::Owned(
            text.split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    // 6. Replace watermark-set members with a single space
    if options.strip_watermarks {
        text = Cow::Owned(
            text.chars()
                .map(|c| if set.contains(c) { ' ' } else { c })
                .collect(),
        );
    }

    // 7. Custom substitution
    if let Some((re, replacement)) = custom {
        text = Cow::Owned(re.replace_all(&text, replacement).into_owned());
    }

    debug!(len = text.len(), "clean complete");
    Ok(text.into_owned())
}
