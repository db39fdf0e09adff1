use leptos::prelude::*;

use crate::profile::profile;

use super::{counter::Counter, homepage::SectionTitle, reveal::Reveal};

#[component]
pub fn About() -> impl IntoView {
    let about = &profile().about;

    view! {
        <section id="about" class="relative py-20 md:py-32">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="About" accent="Me" />
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <Reveal class="space-y-6">
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| {
                                view! { <p class="text-lg text-slate-300 leading-relaxed">{p.clone()}</p> }
                            })
                            .collect_view()}
                    </Reveal>
                    <div class="grid grid-cols-2 gap-6">
                        {about
                            .stats
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Reveal
                                        delay_ms=(i as u32) * 100
                                        class="card p-8 text-center"
                                    >
                                        <div class="text-4xl font-bold text-cyan-400 mb-2">
                                            <Counter
                                                value=stat.value
                                                decimals=stat.decimals
                                                suffix=stat.suffix.clone()
                                            />
                                        </div>
                                        <div class="text-slate-400">{stat.label.clone()}</div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
