//! Custom hooks for terminal components.
//!
//! Provides reusable stateful logic for terminal input handling.

use leptos::prelude::*;

/// State for cycling through Tab completions.
///
/// After a Tab press with several matches, each further Tab replaces the
/// name being completed with the next match.
#[derive(Clone, Copy)]
pub struct TabCycleState {
    /// All matching completions available for cycling.
    pub matches: RwSignal<Vec<String>>,
    /// Current index in the matches list.
    pub index: RwSignal<usize>,
    /// Input text preceding the completed name.
    pub stem: RwSignal<String>,
}

impl TabCycleState {
    pub fn new() -> Self {
        Self {
            matches: RwSignal::new(vec![]),
            index: RwSignal::new(0),
            stem: RwSignal::new(String::new()),
        }
    }

    /// Check if currently in Tab cycling mode (has matches).
    pub fn is_active(&self) -> bool {
        self.matches.with(|m| !m.is_empty())
    }

    pub fn clear(&self) {
        self.matches.set(vec![]);
        self.index.set(0);
        self.stem.set(String::new());
    }

    /// Start a new cycle positioned before the first match.
    pub fn start(&self, stem: String, matches: Vec<String>) {
        self.stem.set(stem);
        self.matches.set(matches);
        self.index.set(0);
    }

    /// Advance to the next match, wrapping around.
    pub fn advance(&self) {
        let len = self.matches.with(Vec::len);
        if len > 0 {
            self.index.update(|i| *i = (*i + 1) % len);
        }
    }

    /// Full input line for the currently selected match.
    pub fn completion(&self) -> Option<String> {
        let selected = self
            .matches
            .with(|matches| matches.get(self.index.get_untracked()).cloned())?;
        Some(self.stem.with(|stem| format!("{}{}", stem, selected)))
    }
}

impl Default for TabCycleState {
    fn default() -> Self {
        Self::new()
    }
}

/// State for ghost text hints shown while typing.
#[derive(Clone, Copy)]
pub struct HintState {
    /// Current hint text to display after user input.
    pub hint: RwSignal<Option<String>>,
}

impl HintState {
    pub fn new() -> Self {
        Self {
            hint: RwSignal::new(None),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.hint.get_untracked()
    }

    pub fn set(&self, value: Option<String>) {
        self.hint.set(value);
    }

    pub fn clear(&self) {
        self.hint.set(None);
    }
}

impl Default for HintState {
    fn default() -> Self {
        Self::new()
    }
}
