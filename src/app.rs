mod about;
mod achievements;
mod blog;
mod contact;
mod counter;
mod experience;
mod footer;
mod hero;
mod homepage;
mod navbar;
mod projects;
mod reveal;
mod schedule;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-slate-900 text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = crate::profile::profile();
    let description = format!("Portfolio of {} - {}", profile.name, profile.taglines.join(", "));

    view! {
        <Title text=format!("{} | {}", profile.name, profile.taglines.join(" & ")) />
        <Meta name="description" content=description.clone() />
        <Meta property="og:title" content=profile.name.clone() />
        <Meta property="og:description" content=description />
        <Meta property="og:type" content="website" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
