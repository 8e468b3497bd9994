use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// EMA crossover parameters edited from the admin dashboard. `leverage` is
/// `1` for long/cross and `-1` for short; the strategy engine interprets it,
/// the dashboard does not.
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

/// Shared holder for the live strategy parameters. Writes replace the whole
/// object; overlapping writers are last-write-wins with no sequencing token.
#[derive(Debug, Default)]
pub struct ConfigStore {
    current: RwLock<StrategyConfig>,
}

impl ConfigStore {
    pub fn new(initial: StrategyConfig) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn snapshot(&self) -> StrategyConfig {
        *self.current.read().await
    }

    /// Replace the stored config wholesale and return what is now stored.
    pub async fn replace(&self, next: StrategyConfig) -> StrategyConfig {
        let mut guard = self.current.write().await;
        *guard = next;
        *guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_dashboard_values() {
        let config = StrategyConfig::default();
        assert_eq!(config.fast, 8);
        assert_eq!(config.slow, 24);
        assert_eq!(config.leverage, 1);
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let config: StrategyConfig =
            serde_json::from_str(r#"{"fast":8,"slow":24,"leverage":-1}"#).expect("valid config");
        assert_eq!(config.leverage, -1);
    }

    #[tokio::test]
    async fn replace_overwrites_wholesale() {
        let store = ConfigStore::default();
        let next = StrategyConfig {
            fast: 12,
            slow: 48,
            leverage: -1,
        };

        let stored = store.replace(next).await;
        assert_eq!(stored, next);
        assert_eq!(store.snapshot().await, next);
    }
}
