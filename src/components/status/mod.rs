//! Status bar component.
//!
//! Displays the user and the working directory.
//! Provides view toggle button to switch between Terminal and Website.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, USER_NAME};
use crate::models::ViewMode;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar component displaying user and location information.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Full labels: `User: visitor \| Location: ~` |
/// | Mobile (< 768px) | Values only: `visitor · ~` |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let display_path = Signal::derive(move || ctx.session.with(|s| s.current_path().to_string()));
    let user = format!("{}@{}", USER_NAME, APP_NAME);

    // View toggle
    let view_mode = ctx.view_mode;
    let toggle_view = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_view_mode();
    };
    let toggle_title = Signal::derive(move || match view_mode.get() {
        ViewMode::Terminal => "Switch to Website",
        ViewMode::Website => "Switch to Terminal",
    });

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelText>"User:"</span>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{user}</span>
                </span>

                <span class=css::labelCyan>
                    <span class=css::labelText>"Location:"</span>
                    <span class=css::labelIcon><Icon icon=ic::LOCATION /></span>
                    <span class=css::value>{display_path}</span>
                </span>
            </div>

            <button
                class=css::toggleButton
                on:click=toggle_view
                title=toggle_title
            >
                {move || match view_mode.get() {
                    ViewMode::Terminal => view! { <Icon icon=ic::WEBSITE /> }.into_any(),
                    ViewMode::Website => view! { <Icon icon=ic::TERMINAL /> }.into_any(),
                }}
            </button>
        </header>
    }
}
