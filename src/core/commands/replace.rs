use crate::core::app::AutoReplaceApp;
use crate::core::buffer::TextDocument;
use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::rule::RuleSet;
use crate::core::substitute::{Outcome, apply_manual_rules};

pub const NO_RULES_NOTICE: &str = "No manual abbreviations to apply";
pub const NONE_FOUND_NOTICE: &str = "No manual abbreviations found in this note";

/// Expand every manual-only rule throughout the active document
#[derive(Clone)]
pub struct ManualReplaceAll;

impl Command for ManualReplaceAll {
    fn execute(
        &self,
        app: &mut AutoReplaceApp,
        doc: Option<&mut dyn TextDocument>,
    ) -> DispatchResult {
        let Some(doc) = doc else {
            return DispatchResult::Info(NO_RULES_NOTICE.to_string());
        };

        let rules = RuleSet::new(&app.settings.replacements).manual_rules_for(doc.path());
        match apply_manual_rules(doc, &rules) {
            Outcome::NoApplicableRules => DispatchResult::Info(NO_RULES_NOTICE.to_string()),
            Outcome::Replaced(0) => DispatchResult::Info(NONE_FOUND_NOTICE.to_string()),
            Outcome::Replaced(n) => {
                DispatchResult::Info(format!("Manual abbreviations replaced: {}", n))
            }
        }
    }
}
