use leptos::*;
use serde_json::Value;

use crate::live::types::ConnectionPhase;

use super::{status::StatusPanel, strategy_form::StrategyForm, update_feed::UpdatePanel};

/// Admin view over the live feed plus the editable strategy parameters.
/// Purely presentational: the phase and message arrive as props, the config
/// section manages its own fetch/save round trip.
#[component]
pub fn Dashboard(
    phase: ReadSignal<ConnectionPhase>,
    message: ReadSignal<Option<Value>>,
) -> impl IntoView {
    view! {
        <div class="dashboard">
            <StatusPanel phase=phase />
            <UpdatePanel message=message />
            <StrategyForm />
        </div>
    }
}
