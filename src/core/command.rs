//! Command Pattern implementation for the autoreplace engine
//!
//! Every user-invocable action implements [`Command`] and is registered by
//! name in the app's command registry, so a host can bind it to whatever its
//! command palette or keymap offers.

use crate::core::app::AutoReplaceApp;
use crate::core::buffer::TextDocument;
use crate::core::dispatcher::DispatchResult;

/// Core command trait
///
/// # Parameters
/// - `app`: Mutable reference to engine state (settings, store, registry)
/// - `doc`: The active document, or `None` when the host has no document open
///
/// # Returns
/// `DispatchResult` carrying the notice to show the user, if any
pub trait Command: CloneCommand {
    fn execute(&self, app: &mut AutoReplaceApp, doc: Option<&mut dyn TextDocument>)
    -> DispatchResult;
}

/// Lets the registry hand out copies of its boxed commands.
/// Any `Clone` command gets it for free.
pub trait CloneCommand {
    fn clone_box(&self) -> Box<dyn Command>;
}

impl<T> CloneCommand for T
where
    T: 'static + Command + Clone,
{
    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Box<dyn Command> {
        self.as_ref().clone_box()
    }
}
