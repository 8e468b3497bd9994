use leptos::*;
use serde_json::Value;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
pub mod config;
pub mod format;
pub mod live;
mod logging;

pub use components::dashboard::Dashboard;
pub use config::StrategyConfig;
pub use live::types::ConnectionPhase;
pub use logging::init_logging;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::live::socket::connect_with_retry;

/// Root shell: owns the live feed signals and passes them down as props.
#[component]
pub fn App() -> impl IntoView {
    let phase = create_rw_signal(ConnectionPhase::Uninstantiated);
    let message = create_rw_signal(None::<Value>);

    #[cfg(target_arch = "wasm32")]
    {
        let phase_for_feed = phase;
        let message_for_feed = message;
        leptos::create_effect(move |_| init_live_feed(message_for_feed, phase_for_feed));
    }

    view! {
        <main class="app-root">
            <h1>"Trading Desk Admin"</h1>
            <Dashboard phase=phase.read_only() message=message.read_only() />
        </main>
    }
}

/// Entry point invoked by the generated WASM loader.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init_live_feed(message: RwSignal<Option<Value>>, phase: RwSignal<ConnectionPhase>) {
    let on_message = Rc::new(move |value: Value| message.set(Some(value)));
    let on_phase = Rc::new(move |next: ConnectionPhase| phase.set(next));
    connect_with_retry(resolve_feed_url(), on_message, on_phase);
}

#[cfg(target_arch = "wasm32")]
fn resolve_feed_url() -> String {
    let fallback = "127.0.0.1".to_string();
    let host = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or(fallback);

    format!("ws://{host}:8000/ws")
}
