//! This module defines the central `AutoReplaceApp` structure, which owns the
//! settings, the settings store, the command registry and the change hooks.
//! A host creates one app at start-up and forwards buffer-change
//! notifications and commands to it.

use std::collections::HashMap;

use crate::config::Settings;
use crate::core::buffer::TextDocument;
use crate::core::command::Command;
use crate::core::dispatcher::{self, DispatchResult};
use crate::core::events::{AutoTriggerHook, ChangeHook, EventBus};
use crate::core::rule_editor::RuleEditor;
use crate::core::store::{MemoryStore, SettingsStore, StoreError};

/// AutoReplaceApp: the root engine state.
pub struct AutoReplaceApp {
    /// Live settings snapshot used by every trigger
    pub settings: Settings,
    /// Where settings are persisted
    store: Box<dyn SettingsStore>,
    /// Registry of commands implementing the Command pattern
    pub command_registry: HashMap<String, Box<dyn Command>>,
    /// Buffer-change hooks
    events: EventBus,
    /// Last notice produced by a command
    pub message: Option<String>,
}

impl AutoReplaceApp {
    /// App with default settings kept in memory
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(MemoryStore::new()))
    }

    /// Load settings from `store` (falling back to defaults on failure),
    /// register commands and the auto-trigger hook.
    pub fn load(mut store: Box<dyn SettingsStore>) -> Self {
        let settings = Settings::load_from(store.as_mut());
        Self::with_settings(settings, store)
    }

    fn with_settings(settings: Settings, store: Box<dyn SettingsStore>) -> Self {
        let mut app = Self {
            settings,
            store,
            command_registry: HashMap::new(),
            events: EventBus::new(),
            message: None,
        };
        crate::core::commands::register_all(&mut app);
        app.events.register(Box::new(AutoTriggerHook::default()));
        app
    }

    /// Add another change hook after the auto-trigger
    pub fn register_hook(&mut self, hook: Box<dyn ChangeHook>) {
        self.events.register(hook);
    }

    /// Forward a buffer-change notification.
    ///
    /// Does nothing while auto-replace is off or when no document is active.
    pub fn handle_change(&mut self, doc: Option<&mut dyn TextDocument>) {
        if !self.settings.auto_replace {
            return;
        }
        let Some(doc) = doc else {
            return;
        };
        self.events.emit(&self.settings, doc);
    }

    /// Run a named command against the active document
    pub fn execute(
        &mut self,
        command_name: &str,
        doc: Option<&mut dyn TextDocument>,
    ) -> DispatchResult {
        dispatcher::dispatch(self, command_name, doc)
    }

    /// Start editing a copy of the current settings
    pub fn edit_rules(&self) -> RuleEditor {
        RuleEditor::new(&self.settings)
    }

    /// Install the edited settings and save them.
    /// The new settings take effect on the next trigger even if saving fails.
    pub fn commit(&mut self, editor: RuleEditor) -> Result<(), StoreError> {
        self.settings = editor.into_settings();
        self.settings.save_to(self.store.as_mut())
    }

    /// Re-read the settings from the store
    pub fn reload(&mut self) {
        self.settings = Settings::load_from(self.store.as_mut());
    }
}

impl Default for AutoReplaceApp {
    fn default() -> Self {
        Self::new()
    }
}
