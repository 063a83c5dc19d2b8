//! autoreplace - rule-based abbreviation expansion for text editors
//!
//! The host forwards buffer-change notifications to
//! [`AutoReplaceApp::handle_change`](core::app::AutoReplaceApp::handle_change)
//! and binds the `manual-replace-all` command; everything else happens
//! through the [`TextDocument`](core::buffer::TextDocument) trait.

pub mod config;
pub mod core;

pub use crate::config::Settings;
pub use crate::core::app::AutoReplaceApp;
pub use crate::core::buffer::{Buffer, Position, TextDocument};
pub use crate::core::rule::{Mode, Rule, RuleSet};
