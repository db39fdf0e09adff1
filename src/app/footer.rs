use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::profile::profile;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.with_timezone(&Utc).year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let profile = profile();
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. All rights reserved.", profile.name),
        None => format!("© {}. All rights reserved.", profile.name),
    };

    view! {
        <footer class="border-t border-slate-800 py-12">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 flex flex-col md:flex-row items-center justify-between gap-6">
                <div>
                    <p class="text-xl font-bold text-cyan-400">{profile.name.clone()}</p>
                    <p class="text-sm text-slate-400">{profile.taglines.join(" · ")}</p>
                </div>
                <nav class="flex flex-wrap gap-6 text-slate-400">
                    {profile
                        .nav
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href.clone() class="hover:text-cyan-400">
                                    {link.name.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="text-sm text-slate-500 text-center md:text-right">
                    <p>{copyright}</p>
                    <a href="#hero" class="hover:text-cyan-400">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
