//! Command implementations
//!
//! - **replace**: document-wide expansion of manual-only rules
//!
//! All commands implement the [`Command`](crate::core::command::Command) trait.

/// Manual replace-all
pub mod replace;

/// Command name of [`replace::ManualReplaceAll`]
pub const MANUAL_REPLACE_ALL: &str = "manual-replace-all";

/// Register all commands in the application
pub fn register_all(app: &mut crate::core::app::AutoReplaceApp) {
    use crate::core::command::Command;
    use std::collections::HashMap;

    use self::replace::*;

    let mut registry: HashMap<String, Box<dyn Command>> = HashMap::new();

    registry.insert(MANUAL_REPLACE_ALL.to_string(), Box::new(ManualReplaceAll));

    app.command_registry = registry;
}
