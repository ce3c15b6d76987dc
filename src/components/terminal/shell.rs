//! Main shell component.
//!
//! Container component that switches between the Terminal and the Website
//! panel and draws the CRT effects over both.

use leptos::prelude::*;

use super::terminal::Terminal;
use crate::app::AppContext;
use crate::components::status::Status;
use crate::components::website::Website;
use crate::models::ViewMode;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Shell component managing Terminal/Website views.
///
/// - Manages view switching (via ViewMode)
/// - Provides global UI effects (CRT overlay, scanlines)
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    Effect::new(move |prev: Option<ViewMode>| {
        let mode = ctx.view_mode.get();
        if prev.is_some_and(|p| p != mode) {
            log::info(&format!("view mode: {:?}", mode));
        }
        mode
    });

    view! {
        <div class=css::screen>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <Status />

            <div class=css::main>
                {move || {
                    match ctx.view_mode.get() {
                        ViewMode::Terminal => view! { <Terminal /> }.into_any(),
                        ViewMode::Website => view! { <Website /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}
