use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::animation::{counter::CountUp, Runner};

use super::{reveal::seen_once, schedule::BrowserScheduler};

/// Number that counts up from zero the first time it scrolls into view.
#[component]
pub fn Counter(
    value: f64,
    #[prop(optional)] decimals: usize,
    #[prop(optional, into)] suffix: String,
    #[prop(default = 2000)] duration_ms: u64,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Span>::new();
    let seen = seen_once(use_element_visibility(node_ref));
    let initial = format!("{:.*}{}", decimals, 0.0, suffix);
    let (text, set_text) = signal(initial);

    let runner = StoredValue::new_local(Runner::<BrowserScheduler, CountUp>::new(
        BrowserScheduler,
        move |t: &str| set_text.set(t.to_string()),
    ));

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) || !seen.get() {
            return started.unwrap_or(false);
        }
        let count = CountUp::new(value, Duration::from_millis(duration_ms))
            .decimals(decimals)
            .suffix(suffix.clone());
        runner.with_value(|r| r.start(count));
        true
    });
    on_cleanup(move || {
        runner.try_with_value(|r| r.stop());
    });

    view! { <span node_ref=node_ref>{text}</span> }
}
