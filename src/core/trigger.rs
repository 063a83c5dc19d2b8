//! Auto-trigger: expand the word the user just finished typing
//!
//! Runs on every buffer change. When the character before the caret is a
//! trigger character, the run of non-whitespace text before it is looked up
//! in auto mode and, if a rule applies, replaced in place.

use crate::config::Settings;
use crate::core::buffer::{Position, TextDocument};
use crate::core::matcher::is_trigger_char;
use crate::core::rule::{Mode, RuleSet};

/// A replacement performed by the auto-trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub line: usize,
    /// Char offset where the word started
    pub start: usize,
    /// Char offset just past the word (the trigger character sits here)
    pub end: usize,
    pub word: String,
    pub replacement: String,
}

/// Find the word completed by the character before `ch`.
/// Returns the word and its char span within `line`.
pub fn completed_word(line: &str, ch: usize) -> Option<(String, usize, usize)> {
    let chars: Vec<char> = line.chars().collect();
    if ch == 0 || ch > chars.len() {
        return None;
    }

    let trigger = chars[ch - 1];
    if !is_trigger_char(trigger) {
        return None;
    }

    let end = ch - 1;
    let mut start = end;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    if start == end {
        return None;
    }

    Some((chars[start..end].iter().collect(), start, end))
}

/// Handle one buffer change. Returns the expansion if one was made.
pub fn on_change(settings: &Settings, doc: &mut dyn TextDocument) -> Option<Expansion> {
    if !settings.auto_replace {
        return None;
    }

    let cursor = doc.cursor();
    let line = doc.line(cursor.line)?;
    let (word, start, end) = completed_word(&line, cursor.ch)?;

    let rules = RuleSet::new(&settings.replacements);
    let rule = rules.resolve(&word, doc.path(), Mode::Auto)?;

    // Replacing a word with itself would only add an undo step
    if rule.expansion == word {
        return None;
    }

    doc.replace_range(
        Position::new(cursor.line, start),
        Position::new(cursor.line, end),
        &rule.expansion,
    );
    log::debug!(
        "auto-expanded '{}' -> '{}' at {}:{}",
        word,
        rule.expansion,
        cursor.line,
        start
    );

    Some(Expansion {
        line: cursor.line,
        start,
        end,
        word,
        replacement: rule.expansion.clone(),
    })
}
