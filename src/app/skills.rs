use leptos::prelude::*;

use crate::profile::profile;

use super::{homepage::SectionTitle, reveal::Reveal};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-20 md:py-32">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Technical" accent="Skills" />
                <div class="grid md:grid-cols-2 gap-10">
                    {profile()
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 100 class="card p-8">
                                    <h3 class="text-2xl font-bold mb-6">
                                        {format!("{} {}", category.icon, category.category)}
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div>
                                                        <div class="flex justify-between text-sm mb-1">
                                                            <span>{skill.name.clone()}</span>
                                                            <span class="text-slate-400">
                                                                {format!("{}%", skill.percent())}
                                                            </span>
                                                        </div>
                                                        <div class="h-2 rounded-full bg-slate-700 overflow-hidden">
                                                            // width animates in via the .revealed rule
                                                            <div
                                                                class="skill-bar h-full bg-gradient-to-r from-cyan-500 to-blue-500"
                                                                style=format!("--level: {}%", skill.percent())
                                                            ></div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
