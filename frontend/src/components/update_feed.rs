use leptos::*;
use serde_json::Value;

use crate::format::pretty_update;

/// Shows the most recent feed payload as indented JSON. Each message replaces
/// the previous one; nothing accumulates.
#[component]
pub fn UpdatePanel(message: ReadSignal<Option<Value>>) -> impl IntoView {
    let rendered = create_memo(move |_| message.with(|latest| latest.as_ref().map(pretty_update)));

    view! {
        <section class="panel panel--update">
            <h2>"Latest Update"</h2>
            <Show
                when=move || rendered.with(|text| text.is_some())
                fallback=|| view! { <p class="panel__empty">"No data yet..."</p> }
            >
                <pre class="panel__payload">{move || rendered.get().unwrap_or_default()}</pre>
            </Show>
        </section>
    }
}
