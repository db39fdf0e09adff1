use leptos::prelude::*;

use crate::profile::profile;

use super::{
    homepage::{SectionTitle, TechTags},
    reveal::Reveal,
};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="relative py-20 md:py-32 bg-slate-800/50">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Work" accent="Experience" />
                <div class="relative space-y-12 border-l-2 border-cyan-500/30 pl-8">
                    {profile()
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, job)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 200 class="card p-8 relative">
                                    <span class="timeline-dot"></span>
                                    <h3 class="text-2xl font-bold text-slate-100">{job.role.clone()}</h3>
                                    <p class="text-cyan-400 text-lg font-medium mb-2">
                                        {job.company.clone()}
                                    </p>
                                    <p class="text-sm text-slate-400 mb-6">
                                        {format!("📅 {}  ·  📍 {}", job.duration, job.location)}
                                    </p>
                                    <ul class="space-y-2 mb-6 list-disc list-inside text-slate-300">
                                        {job
                                            .achievements
                                            .iter()
                                            .map(|a| view! { <li>{a.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                    <TechTags tags=job.tech.clone() />
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
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="relative py-20 md:py-32">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="My" accent="Education" />
                <div class="grid md:grid-cols-2 gap-10">
                    {profile()
                        .education
                        .iter()
                        .enumerate()
                        .map(|(i, edu)| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 200 class="card p-8">
                                    <div class="text-4xl mb-4">"🎓"</div>
                                    <h3 class="text-2xl font-bold">{edu.degree.clone()}</h3>
                                    <p class="text-cyan-400 font-medium mb-4">{edu.major.clone()}</p>
                                    <p class="text-slate-300">{edu.institution.clone()}</p>
                                    <p class="text-sm text-slate-400 mt-2">
                                        {format!("📅 {}  ·  📍 {}", edu.duration, edu.location)}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
