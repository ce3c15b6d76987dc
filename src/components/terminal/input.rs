//! Terminal input component with autocompletion and history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use super::hooks::{HintState, TabCycleState};
use crate::core::AutocompleteResult;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input line.
///
/// The text itself lives in the app context; this component only forwards
/// edits and key presses.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<String>,
    /// -1 for ArrowUp, 1 for ArrowDown
    on_history_nav: Callback<i32>,
    /// Ctrl+L: empty the transcript, keep the typed text
    on_clear: Callback<()>,
    on_autocomplete: Callback<String, AutocompleteResult>,
    on_get_hint: Callback<String, Option<String>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let tab_state = TabCycleState::new();
    let hint_state = HintState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let reset_state = move || {
        tab_state.clear();
        hint_state.clear();
    };

    let handle_tab = move |value: String| -> Option<String> {
        if value.trim().is_empty() {
            return None;
        }

        if tab_state.is_active() {
            tab_state.advance();
            return tab_state.completion();
        }

        match on_autocomplete.run(value.clone()) {
            AutocompleteResult::Single(completed) => {
                hint_state.clear();
                Some(completed)
            }
            AutocompleteResult::Multiple {
                common,
                stem,
                matches,
            } => {
                hint_state.clear();
                tab_state.start(stem, matches);
                if common.len() > value.len() {
                    Some(common)
                } else {
                    tab_state.completion()
                }
            }
            AutocompleteResult::None => None,
        }
    };

    let handle_arrow_right = move |current: &str| -> Option<String> {
        let input = input_ref.get()?;
        let pos = input.selection_start().ok().flatten().unwrap_or(0) as usize;
        if pos != current.len() {
            return None;
        }
        let hint = hint_state.get()?;
        hint_state.clear();
        Some(format!("{}{}", current, hint))
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Tab" => {
            ev.prevent_default();
            if let Some(completed) = handle_tab(value.get_untracked()) {
                on_input.run(completed);
                move_cursor_to_end();
            }
        }
        "Enter" => {
            reset_state();
            on_submit.run(value.get_untracked());
        }
        "ArrowUp" => {
            ev.prevent_default();
            reset_state();
            on_history_nav.run(-1);
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            reset_state();
            on_history_nav.run(1);
            move_cursor_to_end();
        }
        "ArrowRight" => {
            let current = value.get_untracked();
            if let Some(completed) = handle_arrow_right(&current) {
                ev.prevent_default();
                on_input.run(completed);
                move_cursor_to_end();
            }
        }
        "c" if ev.ctrl_key() => {
            reset_state();
            on_input.run(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_clear.run(());
        }
        "Escape" => reset_state(),
        _ => tab_state.clear(),
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let text = input.value();
        tab_state.clear();

        if text.is_empty() {
            hint_state.clear();
        } else {
            hint_state.set(on_get_hint.run(text.clone()));
        }
        on_input.run(text);
    };

    let suggestions_view = move || {
        let matches = tab_state.matches.get();
        let idx = tab_state.index.get();
        (!matches.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {matches.into_iter().enumerate().map(|(i, s)| {
                        let class_name = if i == idx {
                            format!("{} {}", css::suggestion, css::suggestionActive)
                        } else {
                            css::suggestion.to_string()
                        };
                        view! { <span class=class_name>{s}</span> }
                    }).collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    // Ghost text overlay (input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || value.get()}</span>
                        <span class=css::ghostHint>
                            {move || hint_state.hint.get().unwrap_or_default()}
                        </span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=move || value.get()
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>

            {suggestions_view}
        </div>
    }
}
