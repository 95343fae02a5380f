use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Shared gateway state
///
/// Handlers are pure request/response transformations; the only shared
/// data is bookkeeping for logs and the health endpoint. No coordination
/// is needed between concurrent requests.
pub struct AppState {
    /// Startup timestamp in milliseconds
    pub started_at_ms: u64,
    /// Calculations served since startup
    calc_count: AtomicU64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at_ms: now_ms(),
            calc_count: AtomicU64::new(0),
        }
    }

    /// Record one served calculation, returning its sequence number
    pub fn record_calculation(&self) -> u64 {
        self.calc_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn calculations_served(&self) -> u64 {
        self.calc_count.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Current time in milliseconds since the Unix epoch
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
