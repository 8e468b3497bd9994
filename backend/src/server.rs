use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::Response,
    routing::get,
    Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};

use crate::constants::{BIND_ADDR, HEARTBEAT_INTERVAL_MS, UPDATES_CHANNEL_CAPACITY};
use crate::logging;
use crate::strategy::{ConfigStore, StrategyConfig};
use crate::updates::{self, StatusUpdate};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub heartbeat_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: BIND_ADDR.parse().expect("valid default bind address"),
            heartbeat_interval: Duration::from_millis(HEARTBEAT_INTERVAL_MS),
        }
    }
}

#[derive(Clone)]
struct AppState {
    store: Arc<ConfigStore>,
    updates: broadcast::Sender<StatusUpdate>,
}

pub async fn run_with_config(config: ServerConfig) -> Result<()> {
    let store = Arc::new(ConfigStore::default());
    let (updates_tx, _) = broadcast::channel::<StatusUpdate>(UPDATES_CHANNEL_CAPACITY);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let signals_task = tokio::spawn(handle_signals(shutdown_tx));

    let run_result = tokio::try_join!(
        updates::run_publisher(
            config.heartbeat_interval,
            Arc::clone(&store),
            updates_tx.clone(),
            shutdown_rx.clone(),
        ),
        run_admin_server(config.addr, store, updates_tx, shutdown_rx),
    );

    signals_task.abort();
    let _ = signals_task.await;

    run_result?;
    Ok(())
}

async fn handle_signals(shutdown_tx: watch::Sender<bool>) -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    logging::info_simple("signal.received", "Shutdown requested, stopping server");
    let _ = shutdown_tx.send(true);
    Ok(())
}

async fn run_admin_server(
    addr: SocketAddr,
    store: Arc<ConfigStore>,
    updates: broadcast::Sender<StatusUpdate>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind admin server at {addr}"))?;

    logging::info(
        "server.bind",
        "Admin API and websocket feed listening",
        json!({ "addr": addr.to_string() }),
    );

    let state = AppState { store, updates };
    let app = Router::new()
        .route("/api/strategy", get(get_strategy).post(post_strategy))
        .route("/ws", get(websocket_upgrade))
        .with_state(state);

    let shutdown_signal = async move {
        while shutdown.changed().await.is_ok() {
            if *shutdown.borrow() {
                break;
            }
        }
    };

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("admin server terminated with error")?;

    logging::info_simple("server.stop", "Admin server stopped");
    Ok(())
}

async fn get_strategy(State(state): State<AppState>) -> Json<StrategyConfig> {
    Json(state.store.snapshot().await)
}

async fn post_strategy(
    State(state): State<AppState>,
    Json(next): Json<StrategyConfig>,
) -> Json<Value> {
    let stored = state.store.replace(next).await;
    logging::info(
        "strategy.updated",
        "Strategy config replaced by operator",
        json!(stored),
    );

    // Push the new parameters to connected dashboards right away.
    let _ = state.updates.send(StatusUpdate::strategy(stored));

    Json(save_ack(stored))
}

fn save_ack(stored: StrategyConfig) -> Value {
    json!({ "status": "ok", "strategy": stored })
}

async fn websocket_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| async move {
        if let Err(err) = serve_feed_client(socket, state).await {
            logging::warn(
                "feed.client_error",
                "Websocket feed client ended with error",
                json!({ "error": format!("{err:?}") }),
            );
        }
    })
}

async fn serve_feed_client(socket: WebSocket, state: AppState) -> Result<()> {
    logging::info_simple("feed.client.connected", "Websocket feed client connected");

    let mut receiver = state.updates.subscribe();
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // New subscribers immediately see the current strategy, mirroring the
    // snapshot the REST read would return.
    let snapshot = StatusUpdate::strategy(state.store.snapshot().await);
    let payload = serde_json::to_string(&snapshot).context("serialize strategy snapshot")?;
    ws_sender
        .send(Message::Text(payload))
        .await
        .context("send strategy snapshot")?;

    let reader = tokio::spawn(async move {
        while let Some(Ok(message)) = ws_receiver.next().await {
            if matches!(message, Message::Close(_)) {
                break;
            }
        }
    });

    loop {
        match receiver.recv().await {
            Ok(update) => {
                let payload = serde_json::to_string(&update).context("serialize status update")?;
                if ws_sender.send(Message::Text(payload)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                logging::warn(
                    "feed.client.lagged",
                    "Websocket client lagged status updates",
                    json!({ "skipped": skipped }),
                );
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    reader.abort();
    let _ = reader.await;
    logging::info_simple(
        "feed.client.disconnected",
        "Websocket feed client disconnected",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_ack_echoes_stored_strategy() {
        let ack = save_ack(StrategyConfig {
            fast: 8,
            slow: 24,
            leverage: -1,
        });
        assert_eq!(ack["status"], "ok");
        assert_eq!(ack["strategy"]["leverage"], -1);
    }

    #[test]
    fn default_config_binds_local_admin_port() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 8000);
    }
}
