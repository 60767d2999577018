use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PurchaseConfig {
    /// Simulated payment processing latency before an order is persisted.
    #[serde(with = "humantime_serde", default = "PurchaseConfig::default_delay")]
    pub delay: Duration,
}

impl PurchaseConfig {
    fn default_delay() -> Duration {
        Duration::from_secs(3)
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            delay: Self::default_delay(),
        }
    }
}
