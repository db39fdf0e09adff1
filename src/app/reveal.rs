use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Latches a visibility signal: true from the first time it is visible on.
pub fn seen_once(visible: Signal<bool>) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !seen.get_untracked() {
            set_seen(true);
        }
    });
    seen
}

/// Fades and slides its children in once they enter the viewport.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let seen = seen_once(use_element_visibility(node_ref));

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if seen.get() { format!("reveal revealed {class}") } else { format!("reveal {class}") }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
