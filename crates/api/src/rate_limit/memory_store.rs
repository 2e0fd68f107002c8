use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{RateLimitError, RateLimitStore, WindowHit};

/// Above this many tracked keys, stale windows are swept before counting.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u64,
    started: Instant,
    length: Duration,
}

impl Window {
    fn is_over(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.length
    }
}

/// Per-process counters. Accurate for a single instance only.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    windows: DashMap<String, Window>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for MemoryRateLimitStore {
    async fn hit(&self, key: &str, window: Duration) -> Result<WindowHit, RateLimitError> {
        let now = Instant::now();
        if self.windows.len() > SWEEP_THRESHOLD {
            self.windows.retain(|_, w| !w.is_over(now));
        }

        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started: now,
            length: window,
        });
        if entry.is_over(now) {
            *entry = Window {
                count: 0,
                started: now,
                length: window,
            };
        }
        entry.count += 1;

        Ok(WindowHit {
            count: entry.count,
            reset_in: entry.length.saturating_sub(now.duration_since(entry.started)),
        })
    }

    async fn close(&self) -> Result<(), RateLimitError> {
        self.windows.clear();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
