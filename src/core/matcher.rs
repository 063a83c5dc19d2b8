//! Boundary-safe abbreviation matching
//!
//! An abbreviation matches only as a whole token: the text before it must be
//! the start of the line or a boundary character, and the text after it must
//! be the end of the line or a boundary character. The trailing boundary is
//! checked without being consumed, so `АГ,АГ` yields two matches.

use regex::{Regex, RegexBuilder};

use crate::core::rule::Rule;

/// Punctuation that completes a word while typing (besides whitespace)
pub const TRIGGER_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Punctuation that delimits an abbreviation in a bulk pass (besides whitespace)
pub const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Character class used for the leading boundary in compiled patterns
const BOUNDARY_CLASS: &str = r"[\s.,!?;:()\[\]{}<>]";

/// True if typing `c` completes the word before it
pub fn is_trigger_char(c: char) -> bool {
    c.is_whitespace() || TRIGGER_PUNCTUATION.contains(&c)
}

/// True if `c` may delimit an abbreviation in a bulk pass
pub fn is_boundary_char(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(&c)
}

/// A compiled rule: finds whole-token occurrences of one abbreviation
#[derive(Debug, Clone)]
pub struct RuleMatcher<'a> {
    rule: &'a Rule,
    pattern: Regex,
}

impl<'a> RuleMatcher<'a> {
    /// Compile the pattern for `rule`. Matching is case-insensitive and
    /// Unicode-aware; the abbreviation is taken literally.
    pub fn new(rule: &'a Rule) -> Result<Self, regex::Error> {
        let source = format!(
            "(^|{})({})",
            BOUNDARY_CLASS,
            regex::escape(&rule.abbreviation)
        );
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .unicode(true)
            .build()?;
        Ok(Self { rule, pattern })
    }

    pub fn rule(&self) -> &'a Rule {
        self.rule
    }

    /// Replace every whole-token occurrence in `line`.
    /// Returns the new text and the number of occurrences replaced.
    pub fn replace_all(&self, line: &str) -> (String, usize) {
        let mut out = String::with_capacity(line.len());
        let mut copied = 0;
        let mut search_from = 0;
        let mut count = 0;

        while search_from <= line.len() {
            let Some(caps) = self.pattern.captures_at(line, search_from) else {
                break;
            };
            let (Some(whole), Some(token)) = (caps.get(0), caps.get(2)) else {
                break;
            };

            if !ends_at_boundary(line, token.end()) {
                // Retry one character later, like a backtracking engine would
                search_from = match line[whole.start()..].chars().next() {
                    Some(c) => whole.start() + c.len_utf8(),
                    None => break,
                };
                continue;
            }

            // Group 1 holds the leading boundary, which stays verbatim
            out.push_str(&line[copied..token.start()]);
            out.push_str(&self.rule.expansion);
            copied = token.end();
            count += 1;

            if whole.is_empty() {
                break;
            }
            search_from = whole.end();
        }

        out.push_str(&line[copied..]);
        (out, count)
    }
}

/// Zero-width check after a candidate match
fn ends_at_boundary(line: &str, end: usize) -> bool {
    match line[end..].chars().next() {
        None => true,
        Some(c) => is_boundary_char(c),
    }
}

/// Run every matcher over `line` in order, each seeing the previous output.
/// Returns the final text and the total number of replacements.
pub fn apply_matchers(matchers: &[RuleMatcher<'_>], line: &str) -> (String, usize) {
    let mut text = line.to_string();
    let mut total = 0;
    for matcher in matchers {
        let (next, count) = matcher.replace_all(&text);
        if count > 0 {
            text = next;
            total += count;
        }
    }
    (text, total)
}
