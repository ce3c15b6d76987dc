//! UI components built with Leptos.
//!
//! - [`Shell`] - Main shell interface (terminal/website container)
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar showing user and location info
//! - [`terminal`] - Terminal emulator interface
//! - [`website`] - Static personal website panel

pub mod icons;
pub mod status;
pub mod terminal;
pub mod website;

pub use terminal::Shell;
