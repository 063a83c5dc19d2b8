use crate::core::app::AutoReplaceApp;
use crate::core::buffer::TextDocument;

/// Result of command dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// Command executed successfully
    Success,
    /// Command not found/handled
    NotHandled,
    /// Transient notice for the user
    Info(String),
}

/// Look up `command_name` in the registry and run it against `doc`.
///
/// Notices are also left in `app.message` for hosts that poll for them.
pub fn dispatch(
    app: &mut AutoReplaceApp,
    command_name: &str,
    doc: Option<&mut dyn TextDocument>,
) -> DispatchResult {
    let Some(command) = app.command_registry.get(command_name).cloned() else {
        log::warn!("Command not found in registry: {}", command_name);
        return DispatchResult::NotHandled;
    };

    let result = command.execute(app, doc);
    if let DispatchResult::Info(notice) = &result {
        app.message = Some(notice.clone());
    }
    result
}
