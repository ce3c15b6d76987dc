//! Simulated shell for a personal website.
//!
//! A read-only virtual filesystem, a fixed command set and an interactive
//! terminal rendered with Leptos in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
