use leptos::prelude::*;

use crate::profile::profile;

use super::{homepage::SectionTitle, reveal::Reveal};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="relative py-20 md:py-32 bg-slate-800/50">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Key" accent="Achievements" />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-8">
                    {profile()
                        .achievements
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 100 class="card card-hover p-8 text-center">
                                    <div class="text-5xl mb-4">{achievement.icon.clone()}</div>
                                    <h3 class="text-xl font-bold mb-2">{achievement.title.clone()}</h3>
                                    <p class="text-slate-400">{achievement.description.clone()}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
