//! Buffer-change event source
//!
//! Hooks are registered once and called synchronously, in registration
//! order, for every change notification the host forwards. Each call sees
//! the settings as they were when the notification arrived.

use crate::config::Settings;
use crate::core::buffer::TextDocument;

/// One change notification
pub struct ChangeEvent<'a> {
    pub settings: &'a Settings,
    pub doc: &'a mut dyn TextDocument,
}

/// Observer of buffer changes
pub trait ChangeHook {
    fn on_change(&mut self, event: &mut ChangeEvent<'_>);
}

/// Registered change hooks
#[derive(Default)]
pub struct EventBus {
    hooks: Vec<Box<dyn ChangeHook>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: Box<dyn ChangeHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Deliver a change to every hook
    pub fn emit(&mut self, settings: &Settings, doc: &mut dyn TextDocument) {
        let mut event = ChangeEvent { settings, doc };
        for hook in &mut self.hooks {
            hook.on_change(&mut event);
        }
    }
}

/// Hook running the auto-trigger on every change
#[derive(Debug, Default)]
pub struct AutoTriggerHook {
    /// Expansions performed so far
    pub expanded: usize,
}

impl ChangeHook for AutoTriggerHook {
    fn on_change(&mut self, event: &mut ChangeEvent<'_>) {
        if crate::core::trigger::on_change(event.settings, event.doc).is_some() {
            self.expanded += 1;
        }
    }
}
