use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Bounds how often the O(n²) match-count summary is recomputed. The
/// cache is process-local and lost on restart, which is fine for a
/// summary that is recomputable from the store at any time.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.lock().await;
        match slot.as_ref() {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    pub async fn put(&self, value: T) {
        let mut slot = self.slot.lock().await;
        *slot = Some((Instant::now(), value));
    }
}
