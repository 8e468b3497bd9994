use leptos::*;

use crate::format::{phase_badge_class, phase_label};
use crate::live::types::ConnectionPhase;

#[component]
pub fn StatusPanel(phase: ReadSignal<ConnectionPhase>) -> impl IntoView {
    view! {
        <section class="panel panel--status">
            <h2>"WebSocket Status"</h2>
            {move || {
                let current = phase.get();
                let mut classes = format!("status-badge {}", phase_badge_class(current));
                if current.is_open() {
                    classes.push_str(" status-badge--live");
                }
                view! {
                    <span class=classes>{phase_label(current)}</span>
                }
            }}
        </section>
    }
}
