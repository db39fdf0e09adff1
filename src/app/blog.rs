use leptos::prelude::*;

use crate::profile::profile;

use super::{homepage::SectionTitle, reveal::Reveal};

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="relative py-20 md:py-32">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Latest" accent="Articles" />
                <div class="grid lg:grid-cols-3 gap-10">
                    {profile()
                        .blog
                        .iter()
                        .enumerate()
                        .map(|(i, post)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 150 class="card card-hover p-8 flex flex-col">
                                    <div class="flex justify-between text-sm text-slate-400 mb-4">
                                        <span>{format!("📅 {}", post.date)}</span>
                                        <span>{format!("⏱ {}", post.read_time)}</span>
                                    </div>
                                    <h3 class="text-xl font-bold mb-4">{post.title.clone()}</h3>
                                    <p class="text-slate-300 mb-6 flex-grow">{post.excerpt.clone()}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {post
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded bg-slate-700 text-slate-300">
                                                        {format!("#{tag}")}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <span class="self-start text-xs uppercase tracking-wider text-yellow-300">
                                        {post.status.clone()}
                                    </span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
