//! Static personal website panel shown instead of the terminal.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/website/website.module.css");

struct Job {
    title: &'static str,
    company: &'static str,
    date: &'static str,
    summary: &'static str,
}

const OWNER_NAME: &str = "Nusret Ali Kızılaslan";
const OWNER_TITLE: &str = "Computer Engineer";

const ABOUT: &str = "I'm a software engineer graduated from Sabancı University with a \
degree in Computer Science & Engineering and a minor in Finance. Currently working at \
Valensas, developing both backend and frontend applications for businesses.";

const JOBS: &[Job] = &[
    Job {
        title: "Software Engineer",
        company: "Valensas",
        date: "June 2024 - Present",
        summary: "Developing backend and frontend applications for businesses",
    },
    Job {
        title: "Software Engineer",
        company: "Kordsa The Reinforcer",
        date: "July 2022",
        summary: "Developed DataCom and KordsaConnect mobile applications, \
                  contributed to company chatbot",
    },
];

#[component]
pub fn Website() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let back_to_terminal = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_view_mode();
    };

    let jobs = JOBS
        .iter()
        .map(|job| {
            view! {
                <div class=css::job>
                    <h4 class=css::jobTitle>{job.title}</h4>
                    <div class=css::company>{job.company}</div>
                    <div class=css::date>{job.date}</div>
                    <p class=css::text>{job.summary}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=css::container>
            <button class=css::backButton on:click=back_to_terminal>
                <Icon icon=ic::BACK />
                <span>"Back to Terminal"</span>
            </button>

            <main class=css::content>
                <section class=css::hero>
                    <h1 class=format!("{} glow", css::name)>{OWNER_NAME}</h1>
                    <h2 class=css::title>{OWNER_TITLE}</h2>
                </section>

                <section class=css::section>
                    <h3 class=css::heading>
                        <Icon icon=ic::USER />
                        <span>"About Me"</span>
                    </h3>
                    <p class=css::text>{ABOUT}</p>
                </section>

                <section class=css::section>
                    <h3 class=css::heading>
                        <Icon icon=ic::BRIEFCASE />
                        <span>"Experience"</span>
                    </h3>
                    {jobs}
                </section>
            </main>
        </div>
    }
}
