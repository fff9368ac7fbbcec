use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Wraps a section and plays its entrance animation the first time it
/// scrolls into view. The visibility signal is latched so scrolling back up
/// never replays the animation; the animation itself is just a CSS class
/// swap (see `input.css`).
#[component]
pub fn Reveal(children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || if shown() { "reveal reveal-shown" } else { "reveal" }
        >
            {children()}
        </div>
    }
}
