use leptos::prelude::*;

use crate::profile::{profile, Project};

use super::{
    homepage::{SectionTitle, TechTags},
    reveal::Reveal,
};

const PREVIEW_FEATURES: usize = 2;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative py-20 md:py-32 bg-slate-800/50">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Featured" accent="Projects" />
                <div class="grid lg:grid-cols-3 gap-10">
                    {profile()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 150 class="h-full">
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let has_more = project.features.len() > PREVIEW_FEATURES;

    let features = move || {
        let shown = if expanded.get() {
            project.features.len()
        } else {
            PREVIEW_FEATURES
        };
        project
            .features
            .iter()
            .take(shown)
            .map(|f| view! { <li>{f.clone()}</li> })
            .collect_view()
    };

    view! {
        <article class="card card-hover p-8 h-full flex flex-col">
            <div class="text-6xl mb-6">{project.thumbnail.clone()}</div>
            {project
                .badge
                .clone()
                .map(|badge| {
                    view! {
                        <span class="self-start mb-4 px-3 py-1 text-sm rounded-full bg-yellow-500/20 text-yellow-300">
                            {badge}
                        </span>
                    }
                })}
            <h3 class="text-2xl font-bold mb-2">{project.title.clone()}</h3>
            <p class="text-sm text-slate-400 mb-4">{project.date.clone()}</p>
            <p class="text-slate-300 mb-6">{project.description.clone()}</p>
            <div class="grid grid-cols-2 gap-3 mb-6">
                {project
                    .metrics
                    .iter()
                    .map(|m| {
                        view! {
                            <div class="rounded-lg bg-slate-700/40 p-3 text-sm text-center text-cyan-300">
                                {m.clone()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="space-y-2 mb-4 list-disc list-inside text-slate-300 text-sm">{features}</ul>
            <Show when=move || has_more>
                <button
                    class="self-start text-cyan-400 hover:text-cyan-300 text-sm mb-6"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Show less ▲" } else { "Show more ▼" }}
                </button>
            </Show>
            <div class="mt-auto space-y-6">
                <TechTags tags=project.tech.clone() />
                <div class="flex gap-4">
                    {project
                        .live
                        .clone()
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="btn-primary px-5 py-2">
                                    "Live Demo ↗"
                                </a>
                            }
                        })}
                    {project
                        .github
                        .clone()
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" class="btn-secondary px-5 py-2">
                                    "Source"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
