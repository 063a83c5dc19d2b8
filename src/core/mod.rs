//! This module constitutes the headless expansion engine: rules and their
//! resolution, boundary-safe matching, the auto-trigger, the bulk
//! substitution pass, and the command and event plumbing a host talks to.

pub mod app;
pub mod buffer;
pub mod command;
pub mod commands;
pub mod dispatcher;
pub mod events;
pub mod matcher;
pub mod rule;
pub mod rule_editor;
pub mod store;
pub mod substitute;
pub mod trigger;
