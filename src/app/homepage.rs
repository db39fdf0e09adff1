use leptos::prelude::*;

use super::{
    about::About,
    achievements::Achievements,
    blog::Blog,
    contact::Contact,
    experience::{Education, Experience},
    footer::Footer,
    hero::Hero,
    navbar::{Navbar, ScrollProgress},
    projects::Projects,
    reveal::Reveal,
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ScrollProgress />
        <Navbar />
        <main class="min-h-screen">
            <Hero />
            <About />
            <Experience />
            <Education />
            <Projects />
            <Skills />
            <Achievements />
            <Blog />
            <Contact />
        </main>
        <Footer />
    }
}

/// Two-tone section heading with the underline bar.
#[component]
pub fn SectionTitle(lead: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16 md:mb-20">
            <h2 class="text-5xl md:text-6xl font-bold mb-8">
                <span class="text-slate-300">{lead}</span>
                " "
                <span class="text-cyan-400">{accent}</span>
            </h2>
            <div class="section-bar w-32 h-1 bg-gradient-to-r from-cyan-500 to-blue-500 mx-auto rounded-full"></div>
        </Reveal>
    }
}

/// Row of small technology pills.
#[component]
pub fn TechTags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tags
                .into_iter()
                .map(|t| {
                    view! {
                        <span class="px-3 py-1 text-sm rounded-full bg-slate-700/60 text-cyan-300 border border-slate-600">
                            {t}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
