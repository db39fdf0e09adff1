use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::{animation::tagline::TaglineAnimator, profile::profile};

use super::schedule::BrowserScheduler;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let (tagline, set_tagline) = signal(String::new());

    let animator = StoredValue::new_local(TaglineAnimator::new(
        BrowserScheduler,
        move |text: &str| set_tagline.set(text.to_string()),
    ));

    let phrases = profile
        .phrases()
        .inspect_err(|e| log::error!("hero tagline disabled: {e}"))
        .ok();

    // only animate while the hero is on screen
    Effect::new(move |_| {
        let visible = visible.get();
        animator.with_value(|animator| match (&phrases, visible) {
            (Some(phrases), true) => animator.start_with(phrases.clone(), profile.tagline),
            _ => animator.stop(),
        });
    });
    on_cleanup(move || {
        animator.try_with_value(|animator| animator.stop());
    });

    let github = profile.contact.github.clone();
    let linkedin = profile.contact.linkedin.clone();
    let mailto = format!("mailto:{}", profile.contact.email);

    view! {
        <section
            id="hero"
            node_ref=section_ref
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-slate-900 via-blue-950/50 to-slate-900"></div>
            <div class="relative z-10 text-center px-6 max-w-5xl">
                <p class="text-cyan-400 font-medium tracking-wider mb-6 hero-fade">"Hello, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-bold mb-8 hero-fade">{profile.name.clone()}</h1>
                <h2 class="text-2xl md:text-4xl font-semibold text-slate-300 h-12 mb-8">
                    <span class="text-cyan-400">{tagline}</span>
                    <span class="caret" aria-hidden="true">
                        "|"
                    </span>
                </h2>
                <p class="text-lg md:text-xl text-slate-400 max-w-2xl mx-auto mb-12 hero-fade">
                    {profile.headline.clone()}
                </p>
                <div class="flex flex-wrap justify-center gap-6 mb-16 hero-fade">
                    <a href="#projects" class="btn-primary px-10 py-5 text-lg font-semibold">
                        "View Projects →"
                    </a>
                    <a href="/resume.pdf" download class="btn-secondary px-10 py-5 text-lg font-medium">
                        "Download Resume"
                    </a>
                </div>
                <div class="flex items-center justify-center gap-8 hero-fade">
                    <a
                        href=github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link"
                        aria-label="GitHub"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    {linkedin
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-link"
                                    aria-label="LinkedIn"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                            }
                        })}
                    <a href=mailto class="social-link" aria-label="Email">
                        "✉"
                    </a>
                </div>
            </div>
            <a
                href="#about"
                class="absolute bottom-12 left-1/2 -translate-x-1/2 z-10 flex flex-col items-center gap-3 text-slate-400 hover:text-cyan-400 bounce"
                aria-label="Scroll down"
            >
                <span class="text-sm font-medium tracking-wider">"SCROLL"</span>
                <span>"⌄"</span>
            </a>
        </section>
    }
}
