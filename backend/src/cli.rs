use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::constants::{BIND_ADDR, HEARTBEAT_INTERVAL_MS};
use crate::server::ServerConfig;

#[derive(Debug, Parser)]
#[command(author, version, about = "Trading desk admin backend")]
pub struct Cli {
    /// Address serving the admin API and the websocket feed
    #[arg(long, default_value = BIND_ADDR)]
    pub bind: SocketAddr,

    /// Milliseconds between heartbeat broadcasts to websocket clients
    #[arg(long, default_value_t = HEARTBEAT_INTERVAL_MS)]
    pub heartbeat_ms: u64,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            addr: self.bind,
            heartbeat_interval: Duration::from_millis(self.heartbeat_ms),
        }
    }
}
