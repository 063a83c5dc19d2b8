//! Abbreviation rules and rule resolution
//!
//! A rule maps an abbreviation to its expansion. Rules may be limited to
//! documents under a folder (a literal path prefix, not a glob) and may be
//! reserved for the manual "replace all" command.

use serde::{Deserialize, Serialize};

/// Which trigger is asking for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing-triggered expansion; manual-only rules are skipped
    Auto,
    /// Explicit document-wide command
    Manual,
}

/// A single abbreviation rule
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    /// Text the user types. Compared case-insensitively, stored as entered.
    #[serde(rename = "abbr", alias = "abbreviation")]
    pub abbreviation: String,
    /// Replacement text
    #[serde(rename = "expanded", alias = "expansion")]
    pub expansion: String,
    /// Path prefix this rule is limited to; empty means everywhere
    #[serde(rename = "folder", alias = "folderScope", default)]
    pub folder_scope: String,
    /// Only used by the manual command, never while typing
    #[serde(rename = "manualOnly", default)]
    pub manual_only: bool,
}

impl Rule {
    /// Create a rule that applies everywhere in auto mode
    pub fn new(abbreviation: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            expansion: expansion.into(),
            folder_scope: String::new(),
            manual_only: false,
        }
    }

    /// Restrict the rule to documents whose path starts with `folder`
    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder_scope = folder.into();
        self
    }

    /// Reserve the rule for the manual command
    pub fn manual(mut self) -> Self {
        self.manual_only = true;
        self
    }

    pub fn is_scoped(&self) -> bool {
        !self.folder_scope.is_empty()
    }

    /// True if the rule may be used for a document at `path`
    pub fn applies_to(&self, path: &str) -> bool {
        !self.is_scoped() || path.starts_with(&self.folder_scope)
    }

    /// Rules with blank fields or multi-line text never reach the engine.
    /// Expansions stay on one line so a bulk pass cannot shift line indices.
    pub fn is_valid(&self) -> bool {
        let single_line = |s: &str| !s.contains(['\n', '\r']);
        !self.abbreviation.trim().is_empty()
            && !self.expansion.trim().is_empty()
            && single_line(&self.abbreviation)
            && single_line(&self.expansion)
    }
}

/// Ordered rule collection. Order matters only for tie-breaking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet<'a> {
    rules: &'a [Rule],
}

impl<'a> RuleSet<'a> {
    pub fn new(rules: &'a [Rule]) -> Self {
        Self { rules }
    }

    /// Select the single best rule for `word` typed in the document at `path`.
    ///
    /// Folder-scoped rules whose scope prefixes `path` beat the scope-less
    /// rule, and a longer matching scope beats a shorter one. Among equally
    /// specific candidates the earliest in list order wins. Invalid rules
    /// are never candidates.
    pub fn resolve(&self, word: &str, path: &str, mode: Mode) -> Option<&'a Rule> {
        if word.is_empty() {
            return None;
        }
        let word = word.to_lowercase();

        let mut best: Option<(&'a Rule, usize)> = None;
        for rule in self.rules.iter().filter(|r| r.is_valid()) {
            if rule.abbreviation.to_lowercase() != word {
                continue;
            }
            if mode == Mode::Auto && rule.manual_only {
                continue;
            }
            if !rule.applies_to(path) {
                continue;
            }

            // Scope-less rules rank as length 0, so any matching scope wins
            let specificity = rule.folder_scope.len();
            match best {
                Some((_, current)) if current >= specificity => {}
                _ => best = Some((rule, specificity)),
            }
        }

        best.map(|(rule, _)| rule)
    }

    /// Manual-only rules usable in the document at `path`, longest
    /// abbreviation first. Equal lengths keep list order.
    pub fn manual_rules_for(&self, path: &str) -> Vec<&'a Rule> {
        let mut rules: Vec<&'a Rule> = self
            .rules
            .iter()
            .filter(|r| r.manual_only && r.is_valid() && r.applies_to(path))
            .collect();
        rules.sort_by(|a, b| {
            b.abbreviation
                .chars()
                .count()
                .cmp(&a.abbreviation.chars().count())
        });
        rules
    }
}
