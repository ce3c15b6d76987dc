//! Terminal view component.
//!
//! The terminal interface: transcript followed by the input line.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::{AutocompleteResult, autocomplete, get_hint};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Auto-scroll output to bottom when the session changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx, output_ref);

    // Derived signals
    let prompt = Signal::derive(move || ctx.get_prompt());
    let value = ctx.input;

    // Callbacks
    let on_input = create_input_callback(ctx);
    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_clear = create_clear_callback(ctx);
    let on_autocomplete = create_autocomplete_callback(ctx);
    let on_get_hint = create_hint_callback(ctx);

    let handle_click = move |_| dom::focus_terminal_input();

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || ctx.session.with(|s| s.transcript().to_vec())
                    key=|entry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />

                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        value=value
                        on_input=on_input
                        on_submit=on_submit
                        on_history_nav=on_history_nav
                        on_clear=on_clear
                        on_autocomplete=on_autocomplete
                        on_get_hint=on_get_hint
                    />
                </div>
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_input_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |text: String| ctx.input.set(text))
}

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |line: String| ctx.submit(&line))
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<i32> {
    Callback::new(move |direction: i32| ctx.navigate_history(direction))
}

fn create_clear_callback(ctx: AppContext) -> Callback<()> {
    Callback::new(move |_| ctx.clear_transcript())
}

fn create_autocomplete_callback(ctx: AppContext) -> Callback<String, AutocompleteResult> {
    Callback::new(move |input: String| {
        ctx.session.with_untracked(|s| {
            ctx.fs
                .with_value(|fs| autocomplete(&input, s.current_path(), fs))
        })
    })
}

fn create_hint_callback(ctx: AppContext) -> Callback<String, Option<String>> {
    Callback::new(move |input: String| {
        ctx.session.with_untracked(|s| {
            ctx.fs
                .with_value(|fs| get_hint(&input, s.current_path(), fs))
        })
    })
}
