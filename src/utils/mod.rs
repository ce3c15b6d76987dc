//! Utility modules for DOM access and logging.
//!
//! Provides:
//! - [`dom`] - Focus handling and the browser clock
//! - [`log`] - Browser console logging (no-op off wasm32)

pub mod dom;
pub mod log;
