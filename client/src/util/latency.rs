//! Simulated network latency around repository reads.
//!
//! Pages load through [`load`] so loading states render exactly as they would
//! against a remote backend. Server renders resolve immediately.

use inventory::InventoryError;

#[cfg(test)]
#[path = "latency_test.rs"]
mod latency_test;

pub const SIMULATED_LATENCY_MS: u64 = 600;

/// Wait out the simulated round trip. No-op outside the browser.
pub async fn simulate_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(SIMULATED_LATENCY_MS)).await;
}

/// Run `fetch` after the simulated round trip.
///
/// # Errors
///
/// Whatever `fetch` returns.
pub async fn load<T>(fetch: impl FnOnce() -> Result<T, InventoryError>) -> Result<T, InventoryError> {
    simulate_latency().await;
    fetch()
}

/// `YYYY-MM-DD` for record stamps.
pub fn today_stamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01".to_owned()
    }
}
