pub const BIND_ADDR: &str = "127.0.0.1:8000";
pub const HEARTBEAT_INTERVAL_MS: u64 = 1_000;
pub const UPDATES_CHANNEL_CAPACITY: usize = 64;
