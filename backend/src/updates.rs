use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::{broadcast, watch};
use tokio::time::{interval, MissedTickBehavior};

use crate::logging;
use crate::strategy::{ConfigStore, StrategyConfig};

/// Envelope pushed to every websocket subscriber: a tagged kind plus an
/// arbitrary JSON payload, matching what the dashboard renders verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Value,
}

impl StatusUpdate {
    pub fn strategy(config: StrategyConfig) -> Self {
        Self {
            kind: "strategy",
            data: json!(config),
        }
    }

    pub fn heartbeat(config: StrategyConfig) -> Self {
        Self {
            kind: "heartbeat",
            data: json!({ "strategy": config }),
        }
    }
}

/// Broadcast a heartbeat carrying the current strategy at a fixed cadence
/// until shutdown is requested. Send failures just mean nobody is connected.
pub async fn run_publisher(
    heartbeat: Duration,
    store: Arc<ConfigStore>,
    updates: broadcast::Sender<StatusUpdate>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    logging::info_simple("publisher.start", "Status publisher started");

    let mut ticker = interval(heartbeat);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let config = store.snapshot().await;
                let _ = updates.send(StatusUpdate::heartbeat(config));
            }
            changed = shutdown.changed() => {
                // A dropped sender means the server is gone; stop either way.
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    logging::info_simple("publisher.stop", "Status publisher stopped");
    Ok(())
}
