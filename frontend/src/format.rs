use serde_json::Value;

use crate::live::types::ConnectionPhase;

/// Fixed display label per phase, the same map the dashboard has always used.
pub fn phase_label(phase: ConnectionPhase) -> &'static str {
    match phase {
        ConnectionPhase::Uninstantiated => "Uninstantiated",
        ConnectionPhase::Connecting => "Connecting",
        ConnectionPhase::Open => "Connected",
        ConnectionPhase::Closing => "Closing",
        ConnectionPhase::Closed => "Closed",
    }
}

pub fn phase_badge_class(phase: ConnectionPhase) -> &'static str {
    match phase {
        ConnectionPhase::Uninstantiated => "status--idle",
        ConnectionPhase::Connecting => "status--connecting",
        ConnectionPhase::Open => "status--connected",
        ConnectionPhase::Closing => "status--closing",
        ConnectionPhase::Closed => "status--closed",
    }
}

/// Indented rendering of the latest feed payload for the `<pre>` block.
pub fn pretty_update(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_are_stable() {
        assert_eq!(phase_label(ConnectionPhase::Open), "Connected");
        assert_eq!(
            phase_label(ConnectionPhase::Uninstantiated),
            "Uninstantiated"
        );
    }

    #[test]
    fn every_phase_has_a_label_and_badge() {
        for phase in ConnectionPhase::ALL {
            assert!(!phase_label(phase).is_empty());
            assert!(phase_badge_class(phase).starts_with("status--"));
        }
    }

    #[test]
    fn updates_render_indented() {
        let value = json!({ "type": "positions", "data": [1, 2] });
        let rendered = pretty_update(&value);
        assert!(rendered.contains("\n"));
        assert!(rendered.contains("  \"type\": \"positions\""));
    }
}
