use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};

use crate::{
    contact::{ContactSubmission, SubmitStatus},
    profile::profile,
};

use super::{homepage::SectionTitle, reveal::Reveal};

const STATUS_SHOWN_FOR: Duration = Duration::from_secs(5);

#[cfg(feature = "hydrate")]
async fn post_to_relay(endpoint: &str, body: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let js_err = |err: JsValue| format!("{err:?}");
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let headers = web_sys::Headers::new().map_err(js_err)?;
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(endpoint, &init).map_err(js_err)?;
    let resp: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("relay answered {}", resp.status()))
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_to_relay(_endpoint: &str, _body: &str) -> Result<(), String> {
    Err("the contact form only submits from the browser".to_string())
}

#[component]
pub fn Contact() -> impl IntoView {
    let info = &profile().contact;
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (status, set_status) = signal(SubmitStatus::Idle);

    let expire_status_later = move || {
        set_timeout(
            move || set_status.update(|s| *s = s.expire()),
            STATUS_SHOWN_FOR,
        )
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(sending) = status.get_untracked().begin() else {
            return;
        };
        let submission = ContactSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(e) = submission.validate(&info.subjects) {
            set_error(Some(e.to_string()));
            return;
        }
        set_error(None);
        let body = match submission.relay_body() {
            Ok(body) => body,
            Err(e) => {
                log::error!("could not encode contact form: {e}");
                set_status(SubmitStatus::Failed);
                expire_status_later();
                return;
            }
        };
        set_status(sending);

        let endpoint = info.form_endpoint.clone();
        spawn_local(async move {
            let delivered = match post_to_relay(&endpoint, &body).await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("contact form submission failed: {e}");
                    false
                }
            };
            set_status.update(|s| *s = s.finish(delivered));
            if delivered {
                set_name(String::new());
                set_email(String::new());
                set_subject(String::new());
                set_message(String::new());
            }
            expire_status_later();
        });
    };

    let input_class = "w-full px-5 py-4 rounded-lg bg-slate-900/60 border border-slate-700 focus:outline-none focus:border-cyan-500";

    view! {
        <section id="contact" class="relative py-20 md:py-32 bg-slate-800/50">
            <div class="max-w-screen-2xl mx-auto px-6 md:px-8 lg:px-16 xl:px-24">
                <SectionTitle lead="Get In" accent="Touch" />
                <div class="grid md:grid-cols-2 gap-16">
                    <Reveal>
                        <form class="space-y-6" on:submit=on_submit>
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                class=input_class
                                prop:value=name
                                on:input:target=move |ev| set_name(ev.target().value())
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="your.email@example.com"
                                class=input_class
                                prop:value=email
                                on:input:target=move |ev| set_email(ev.target().value())
                            />
                            <select
                                name="subject"
                                class=input_class
                                prop:value=subject
                                on:change:target=move |ev| set_subject(ev.target().value())
                            >
                                <option value="" disabled selected>
                                    "Select a subject"
                                </option>
                                {info
                                    .subjects
                                    .iter()
                                    .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                                    .collect_view()}
                            </select>
                            <textarea
                                name="message"
                                rows="6"
                                placeholder="Your message..."
                                class=input_class
                                prop:value=message
                                on:input:target=move |ev| set_message(ev.target().value())
                            ></textarea>
                            {move || {
                                error
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p class="text-red-400" role="alert">
                                                {format!("✗ {e}")}
                                            </p>
                                        }
                                    })
                            }}
                            {move || {
                                let current = status.get();
                                current
                                    .message()
                                    .map(|text| {
                                        let class = if current == SubmitStatus::Sent {
                                            "p-5 rounded-lg bg-emerald-500/20 border border-emerald-500/30 text-emerald-400"
                                        } else {
                                            "p-5 rounded-lg bg-red-500/20 border border-red-500/30 text-red-400"
                                        };
                                        view! {
                                            <div class=class role="status">
                                                {text}
                                            </div>
                                        }
                                    })
                            }}
                            <button
                                type="submit"
                                class="btn-primary w-full py-4 text-lg font-semibold"
                                disabled=move || status.get().is_sending()
                            >
                                {move || {
                                    if status.get().is_sending() { "Sending..." } else { "Send Message" }
                                }}
                            </button>
                        </form>
                    </Reveal>
                    <Reveal delay_ms=150 class="space-y-8">
                        <h3 class="text-3xl font-bold">"Let's build something together"</h3>
                        <p class="text-slate-300 text-lg">
                            "Open to internships, full-time roles, freelance Shopify work and ML collaborations."
                        </p>
                        <a href=format!("mailto:{}", info.email) class="block text-cyan-400 text-lg">
                            {format!("✉ {}", info.email)}
                        </a>
                        <p class="text-slate-400">{format!("📍 {}", profile().location)}</p>
                        <a
                            href=info.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block btn-secondary px-6 py-3"
                        >
                            "GitHub →"
                        </a>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
