//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;

use crate::components::Shell;
use crate::core::{Recall, Session, VirtualFs, parse_input};
use crate::models::{ViewMode, prompt};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available to any child
/// through `use_context::<AppContext>()`.
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one terminal session (path, recall buffer, transcript).
    pub session: RwSignal<Session>,

    /// Text in the input field, kept apart so typing does not touch the
    /// transcript.
    pub input: RwSignal<String>,

    /// Read-only virtual filesystem.
    pub fs: StoredValue<VirtualFs>,

    /// Terminal or website view.
    pub view_mode: RwSignal<ViewMode>,
}

impl AppContext {
    /// Creates the context with the built-in filesystem and a session that
    /// starts with the banner.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::with_banner(dom::now())),
            input: RwSignal::new(String::new()),
            fs: StoredValue::new(VirtualFs::builtin()),
            view_mode: RwSignal::new(ViewMode::default()),
        }
    }

    /// Gets the current prompt string for display.
    ///
    /// Format: `{user}@{host}:{path}`
    pub fn get_prompt(&self) -> String {
        self.session.with(|s| prompt(s.current_path()))
    }

    /// Run a submitted line against the session.
    ///
    /// A blank line is ignored and the input field keeps its text.
    pub fn submit(&self, line: &str) {
        if parse_input(line).is_none() {
            return;
        }

        let now = dom::now();
        self.fs.with_value(|fs| {
            self.session.update(|s| {
                s.submit(line, fs, now);
            });
        });
        self.input.update(String::clear);
    }

    /// Step through the recall buffer: -1 for older, 1 for newer.
    pub fn navigate_history(&self, direction: i32) {
        let mut recall = Recall::Unchanged;
        self.session.update(|s| {
            recall = if direction < 0 {
                s.recall_previous()
            } else {
                s.recall_next()
            };
        });
        if recall != Recall::Unchanged {
            self.input.update(|input| recall.apply(input));
        }
    }

    /// Empty the transcript without touching the input or the recall buffer.
    pub fn clear_transcript(&self) {
        self.session.update(Session::clear_transcript);
    }

    /// Switch between the terminal and the website panel.
    pub fn toggle_view_mode(&self) {
        self.view_mode.update(|mode| *mode = mode.toggled());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0c0c0c;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #33ff66;
                            color: #0c0c0c;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
