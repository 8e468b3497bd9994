use serde::{Deserialize, Serialize};

/// Local editable copy of the EMA strategy parameters. Owned by the external
/// strategy service; fetched on mount and overwritten wholesale on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub fast: i64,
    pub slow: i64,
    pub leverage: i64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            fast: 8,
            slow: 24,
            leverage: 1,
        }
    }
}

/// Failures of the config round trip. These are logged, never rendered.
#[derive(Debug)]
pub enum ConfigError {
    Request(String),
    Status(u16),
    Decode(String),
}

/// Coerce raw form input the way the dashboard always has: anything that is
/// not an integer becomes zero.
pub fn coerce_field(input: &str) -> i64 {
    input.trim().parse().unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_config(base: &str) -> Result<StrategyConfig, ConfigError> {
    use gloo_net::http::Request;

    let response = Request::get(&format!("{base}/api/strategy"))
        .send()
        .await
        .map_err(|err| ConfigError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    response
        .json::<StrategyConfig>()
        .await
        .map_err(|err| ConfigError::Decode(err.to_string()))
}

/// Submit the full config; the acknowledgment body is opaque JSON. The caller
/// decides what to do with either outcome — there is no retry or rollback.
#[cfg(target_arch = "wasm32")]
pub async fn save_config(
    base: &str,
    config: &StrategyConfig,
) -> Result<serde_json::Value, ConfigError> {
    use gloo_net::http::Request;

    let response = Request::post(&format!("{base}/api/strategy"))
        .json(config)
        .map_err(|err| ConfigError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| ConfigError::Request(err.to_string()))?;
    if !response.ok() {
        return Err(ConfigError::Status(response.status()));
    }
    response
        .json()
        .await
        .map_err(|err| ConfigError::Decode(err.to_string()))
}
