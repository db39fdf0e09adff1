use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{profile::profile, scroll::progress_percent};

const SCROLLED_PX: f64 = 50.0;

#[cfg(feature = "hydrate")]
fn page_extent() -> (f64, f64) {
    document()
        .document_element()
        .map(|el| (el.scroll_height() as f64, el.client_height() as f64))
        .unwrap_or_default()
}

#[cfg(not(feature = "hydrate"))]
fn page_extent() -> (f64, f64) {
    (0.0, 0.0)
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let style = move || {
        let (height, client) = page_extent();
        format!("width: {:.2}%", progress_percent(y.get(), height, client))
    };

    view! {
        <div class="fixed top-0 left-0 right-0 h-1 bg-slate-800 z-50">
            <div class="h-full bg-gradient-to-r from-blue-500 to-emerald-500" style=style></div>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let profile = profile();
    let (_, y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        profile
            .nav
            .iter()
            .map(|link| {
                let external = !link.is_anchor();
                view! {
                    <a
                        href=link.href.clone()
                        target=external.then_some("_blank")
                        class="nav-link"
                        on:click=move |_| set_menu_open(false)
                    >
                        {link.name.clone()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            if y.get() > SCROLLED_PX {
                "fixed top-1 inset-x-0 z-40 bg-slate-900/90 backdrop-blur shadow-lg transition-all"
            } else {
                "fixed top-1 inset-x-0 z-40 bg-transparent transition-all"
            }
        }>
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 py-4 flex items-center justify-between">
                <a href="#hero" class="text-2xl font-bold text-cyan-400">
                    {initials(&profile.name)}
                </a>
                <div class="hidden md:flex items-center gap-10">{links}</div>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-6 pb-6 bg-slate-900/95">{links}</div>
            </Show>
        </nav>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
