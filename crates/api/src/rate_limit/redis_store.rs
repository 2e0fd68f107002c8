use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Script;

use super::{RateLimitError, RateLimitStore, WindowHit};

/// Increment the counter, start the window on the first hit, and report the
/// remaining window length in milliseconds.
const HIT_SCRIPT: &str = r"
local current = redis.call('INCR', KEYS[1])
if current == 1 then
    redis.call('PEXPIRE', KEYS[1], ARGV[1])
end
local ttl = redis.call('PTTL', KEYS[1])
return {current, ttl}
";

/// Counters shared by every instance pointing at the same Redis.
#[derive(Clone)]
pub struct RedisRateLimitStore {
    conn: ConnectionManager,
    prefix: String,
    script: Script,
}

impl RedisRateLimitStore {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, RateLimitError> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self {
            conn,
            prefix: prefix.to_string(),
            script: Script::new(HIT_SCRIPT),
        })
    }
}

impl From<redis::RedisError> for RateLimitError {
    fn from(err: redis::RedisError) -> Self {
        RateLimitError::Backend(err.to_string())
    }
}

#[async_trait]
impl RateLimitStore for RedisRateLimitStore {
    async fn hit(&self, key: &str, window: Duration) -> Result<WindowHit, RateLimitError> {
        let mut conn = self.conn.clone();
        let window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX).max(1);
        let (count, ttl_ms): (u64, i64) = self
            .script
            .key(format!("{}:{key}", self.prefix))
            .arg(window_ms)
            .invoke_async(&mut conn)
            .await?;

        // PTTL is negative when the key has no expiry; report a full window.
        let reset_in = u64::try_from(ttl_ms).map(Duration::from_millis).unwrap_or(window);
        Ok(WindowHit { count, reset_in })
    }

    async fn close(&self) -> Result<(), RateLimitError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
