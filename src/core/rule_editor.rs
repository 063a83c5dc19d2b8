//! Draft editing of the rule list
//!
//! The settings surface edits a private copy of the settings. Nothing the
//! user does reaches the engine until the draft is committed; a revert
//! throws the draft away.

use thiserror::Error;

use crate::config::Settings;
use crate::core::rule::Rule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("abbreviation is empty")]
    EmptyAbbreviation,
    #[error("expansion is empty")]
    EmptyExpansion,
    #[error("rule text must fit on one line")]
    MultiLine,
    #[error("no rule at index {0}")]
    OutOfRange(usize),
}

/// Working copy of the settings being edited
#[derive(Debug, Clone)]
pub struct RuleEditor {
    draft: Settings,
}

impl RuleEditor {
    /// Start editing a copy of `live`
    pub fn new(live: &Settings) -> Self {
        Self {
            draft: live.clone(),
        }
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    pub fn rules(&self) -> &[Rule] {
        &self.draft.replacements
    }

    pub fn set_auto_replace(&mut self, enabled: bool) {
        self.draft.auto_replace = enabled;
    }

    /// Add a rule at the top of the list. Fields are trimmed.
    pub fn add(
        &mut self,
        abbreviation: &str,
        expansion: &str,
        folder: &str,
        manual_only: bool,
    ) -> Result<(), RuleError> {
        let abbreviation = abbreviation.trim();
        let expansion = expansion.trim();
        if abbreviation.is_empty() {
            return Err(RuleError::EmptyAbbreviation);
        }
        if expansion.is_empty() {
            return Err(RuleError::EmptyExpansion);
        }

        let mut rule = Rule::new(abbreviation, expansion).in_folder(folder.trim());
        rule.manual_only = manual_only;
        if !rule.is_valid() {
            return Err(RuleError::MultiLine);
        }

        self.draft.replacements.insert(0, rule);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Rule, RuleError> {
        if index >= self.draft.replacements.len() {
            return Err(RuleError::OutOfRange(index));
        }
        Ok(self.draft.replacements.remove(index))
    }

    /// Edit a rule in place. Blank fields are allowed here and dropped on commit.
    pub fn rule_mut(&mut self, index: usize) -> Result<&mut Rule, RuleError> {
        self.draft
            .replacements
            .get_mut(index)
            .ok_or(RuleError::OutOfRange(index))
    }

    /// Indices of rules whose abbreviation, expansion or folder contains
    /// `query`, ignoring case. An empty query matches every rule.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let query = query.trim().to_lowercase();
        self.draft
            .replacements
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                query.is_empty()
                    || r.abbreviation.to_lowercase().contains(&query)
                    || r.expansion.to_lowercase().contains(&query)
                    || r.folder_scope.to_lowercase().contains(&query)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Discard all edits and start again from `live`
    pub fn revert(&mut self, live: &Settings) {
        self.draft = live.clone();
    }

    /// Finish editing: incomplete rules are dropped and the settings to
    /// install are returned.
    pub fn into_settings(mut self) -> Settings {
        self.draft.sanitize();
        self.draft
    }
}
