use leptos::{ev, event_target_value, *};

use crate::config::{coerce_field, StrategyConfig};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::config::{fetch_config, save_config};

/// Editable form over the three strategy parameters. Fetches the current
/// config exactly once on mount, keeps each field in its own signal, and
/// submits the current values as-is on save. Fetch and save failures are
/// logged and otherwise ignored; the local edits stay in place either way.
#[component]
pub fn StrategyForm() -> impl IntoView {
    let defaults = StrategyConfig::default();
    let fast = create_rw_signal(defaults.fast);
    let slow = create_rw_signal(defaults.slow);
    let leverage = create_rw_signal(defaults.leverage);

    #[cfg(target_arch = "wasm32")]
    {
        leptos::create_effect(move |_| {
            spawn_local(async move {
                match fetch_config(&resolve_api_base()).await {
                    Ok(config) => {
                        fast.set(config.fast);
                        slow.set(config.slow);
                        leverage.set(config.leverage);
                    }
                    Err(err) => log::error!("error loading strategy config: {err:?}"),
                }
            });
        });
    }

    let on_save = move |_: ev::MouseEvent| {
        let config = StrategyConfig {
            fast: fast.get(),
            slow: slow.get(),
            leverage: leverage.get(),
        };

        #[cfg(target_arch = "wasm32")]
        spawn_local(async move {
            match save_config(&resolve_api_base(), &config).await {
                Ok(ack) => log::info!("config saved: {ack}"),
                Err(err) => log::error!("error saving strategy config: {err:?}"),
            }
        });

        #[cfg(not(target_arch = "wasm32"))]
        let _ = config;
    };

    view! {
        <section class="panel panel--strategy">
            <h2>"Strategy Configuration"</h2>
            <form class="strategy-form" on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                <NumberField label="EMA Fast" value=fast />
                <NumberField label="EMA Slow" value=slow />
                <NumberField label="Leverage (1=long/cross, -1=short)" value=leverage />
                <button class="strategy-form__save" type="button" on:click=on_save>
                    "Save"
                </button>
            </form>
        </section>
    }
}

#[component]
fn NumberField(label: &'static str, value: RwSignal<i64>) -> impl IntoView {
    view! {
        <label class="strategy-form__field">
            <span>{label}</span>
            <input
                type="number"
                prop:value=move || value.get().to_string()
                on:input=move |ev: ev::Event| {
                    value.set(coerce_field(&event_target_value(&ev)));
                }
            />
        </label>
    }
}

#[cfg(target_arch = "wasm32")]
fn resolve_api_base() -> String {
    let fallback = "127.0.0.1".to_string();
    let host = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .filter(|hostname| !hostname.is_empty())
        .unwrap_or(fallback);

    format!("http://{host}:8000")
}

#[cfg(test)]
mod tests {
    use super::*;

    // The form's per-field behavior: editing one field must leave the others
    // untouched, and save must submit exactly the current local values.
    #[test]
    fn field_edits_are_independent() {
        let runtime = create_runtime();

        let fast = create_rw_signal(8_i64);
        let slow = create_rw_signal(24_i64);
        let leverage = create_rw_signal(1_i64);

        leverage.set(coerce_field("-1"));
        assert_eq!(fast.get_untracked(), 8);
        assert_eq!(slow.get_untracked(), 24);
        assert_eq!(leverage.get_untracked(), -1);

        let submitted = StrategyConfig {
            fast: fast.get_untracked(),
            slow: slow.get_untracked(),
            leverage: leverage.get_untracked(),
        };
        assert_eq!(
            serde_json::to_string(&submitted).expect("serializable"),
            r#"{"fast":8,"slow":24,"leverage":-1}"#
        );

        runtime.dispose();
    }
}
