//! Development-testing helpers.
//!
//! WARNING: the functions here should only take effect in development
//! environments. Each is gated on configuration that leaves the feature
//! switched off unless explicitly enabled.

use std::env;
use std::time::Duration;

use tracing::info;

/// Simulate a delayed webservice response for the time (in seconds)
/// configured by the environment variable `SIM_DELAY_<key>`.
///
/// No delay is simulated unless the variable is set to a positive value.
/// Must only be called from endpoint handlers, never from domain logic.
pub async fn simulate_delay(key: &str) {
    let delay_secs = env::var(format!("SIM_DELAY_{key}"))
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(0);

    if delay_secs > 0 {
        info!("[simulate_delay] Simulating delay: {} second(s) [{}]", delay_secs, key);
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        info!("[simulate_delay] Delay simulation end [{}]", key);
    }
}
