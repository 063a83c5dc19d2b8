//! Bulk substitution of manual-only rules across a whole document
//!
//! Each line is rewritten independently. Only lines whose text changed are
//! written back, one line range at a time, and the caret is re-anchored to
//! the same logical text when its line changes length.

use crate::core::buffer::{Position, TextDocument};
use crate::core::matcher::{RuleMatcher, apply_matchers};
use crate::core::rule::Rule;

/// Result of a bulk pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No manual rule applies to this document; nothing was touched
    NoApplicableRules,
    /// Number of occurrences replaced (may be zero)
    Replaced(usize),
}

/// Replace every whole-token occurrence of `rules` in `doc`.
///
/// `rules` must already be limited to manual-only rules applicable to the
/// document and sorted longest abbreviation first (see
/// [`RuleSet::manual_rules_for`](crate::core::rule::RuleSet::manual_rules_for)).
/// Later rules see the text produced by earlier ones on the same line.
pub fn apply_manual_rules(doc: &mut dyn TextDocument, rules: &[&Rule]) -> Outcome {
    let matchers: Vec<RuleMatcher<'_>> = rules
        .iter()
        .filter_map(|rule| match RuleMatcher::new(rule) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("skipping rule '{}': {}", rule.abbreviation, e);
                None
            }
        })
        .collect();

    if matchers.is_empty() {
        return Outcome::NoApplicableRules;
    }

    let cursor = doc.cursor();
    let mut replaced = 0;

    for line_idx in 0..doc.line_count() {
        let Some(original) = doc.line(line_idx) else {
            continue;
        };

        let (new_line, count) = apply_matchers(&matchers, &original);
        replaced += count;
        if new_line == original {
            continue;
        }

        let line_len = original.chars().count();
        doc.replace_range(
            Position::new(line_idx, 0),
            Position::new(line_idx, line_len),
            &new_line,
        );

        if line_idx == cursor.line {
            let ch = anchored_offset(&matchers, &original, cursor.ch);
            doc.set_cursor(Position::new(line_idx, ch));
        }
    }

    log::debug!(
        "manual pass over '{}': {} rule(s), {} replacement(s)",
        doc.path(),
        matchers.len(),
        replaced
    );

    Outcome::Replaced(replaced)
}

/// New caret offset for a caret at `ch` in `original` after the line is
/// rewritten. The text before the caret is rewritten on its own and the
/// caret moves by the change in its length.
pub fn anchored_offset(matchers: &[RuleMatcher<'_>], original: &str, ch: usize) -> usize {
    let prefix: String = original.chars().take(ch).collect();
    let (new_prefix, _) = apply_matchers(matchers, &prefix);
    let old_len = prefix.chars().count();
    let new_len = new_prefix.chars().count();
    (ch + new_len).saturating_sub(old_len)
}
