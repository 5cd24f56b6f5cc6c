//! propdesk-tui - Terminal UI for propdesk
//!
//! This crate provides the ratatui-based terminal interface. It spawns an
//! Engine from propdesk-app and adds terminal rendering, event polling and
//! the dialogs the engine's host requests call for.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
