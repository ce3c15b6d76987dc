use crate::models::HistoryEntry;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// One transcript entry: the echoed prompt line (if any) and its output.
///
/// Output is always rendered as text, one element per line.
#[component]
pub fn Output(entry: HistoryEntry) -> impl IntoView {
    let prompt_line = entry.has_command().then(|| {
        view! {
            <div class=css::command>
                <span class=format!("{} glow", css::textGreen)>{entry.prompt()}</span>
                <span class=css::textDim>"$ "</span>
                <span class=css::textFg>{entry.command.clone()}</span>
            </div>
        }
    });

    let lines = entry
        .output_lines()
        .map(|line| {
            if line.is_empty() {
                view! { <div class=css::lineEmpty></div> }.into_any()
            } else {
                let text = line.to_string();
                view! { <div class=format!("{} {}", css::line, css::textFg)>{text}</div> }
                    .into_any()
            }
        })
        .collect_view();

    view! {
        <div class=css::entry title=entry.timestamp.display.clone()>
            {prompt_line}
            {lines}
        </div>
    }
}
