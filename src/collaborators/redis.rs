use async_trait::async_trait;
use chrono::SecondsFormat;
use clap::ValueEnum;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};

use super::{DepthSource, SampleStore};
use crate::error::BoxError;
use crate::sample::DepthSample;

/// Key prefix for the stream each queue's samples are appended to.
pub const DEFAULT_KEY_PREFIX: &str = "queue-depth:";

// ─── Depth source ────────────────────────────────────────────────

/// How the queue is laid out in Redis, which decides the length command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum QueueKind {
    /// LPUSH/BRPOP work queues → `LLEN`
    #[default]
    List,
    /// Redis streams → `XLEN`
    Stream,
    /// Delayed / scheduled jobs keyed by score → `ZCARD`
    SortedSet,
}

impl QueueKind {
    fn length_command(self) -> &'static str {
        match self {
            Self::List => "LLEN",
            Self::Stream => "XLEN",
            Self::SortedSet => "ZCARD",
        }
    }
}

/// Reads queue depth straight from Redis. A missing key reads as 0.
#[derive(Clone)]
pub struct RedisDepthSource {
    redis: ConnectionManager,
    kind: QueueKind,
}

impl RedisDepthSource {
    pub fn new(redis: ConnectionManager, kind: QueueKind) -> Self {
        Self { redis, kind }
    }
}

#[async_trait]
impl DepthSource for RedisDepthSource {
    async fn depth(&self, queue_name: &str) -> Result<i64, BoxError> {
        let mut conn = self.redis.clone();
        let depth: i64 = redis::cmd(self.kind.length_command())
            .arg(queue_name)
            .query_async(&mut conn)
            .await?;
        Ok(depth)
    }
}

// ─── Sample store ────────────────────────────────────────────────

/// Appends every sample to the stream `<key_prefix><queue_name>`:
///
///   XADD queue-depth:jobs [MAXLEN ~ n] * queue jobs observed_at <rfc3339> depth 5
#[derive(Clone)]
pub struct RedisSampleStore {
    redis: ConnectionManager,
    key_prefix: String,
    max_len: Option<u64>,
}

impl RedisSampleStore {
    pub fn new(redis: ConnectionManager) -> Self {
        Self {
            redis,
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            max_len: None,
        }
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Let Redis trim the stream to roughly `max_len` entries.
    pub fn with_max_len(mut self, max_len: Option<u64>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Stream key samples for `queue_name` are written to.
    pub fn key_for(&self, queue_name: &str) -> String {
        format!("{}{}", self.key_prefix, queue_name)
    }

    fn xadd(&self, sample: &DepthSample) -> redis::Cmd {
        let mut cmd = redis::cmd("XADD");
        cmd.arg(self.key_for(&sample.queue_name));
        if let Some(max_len) = self.max_len {
            cmd.arg("MAXLEN").arg("~").arg(max_len);
        }
        cmd.arg("*")
            .arg("queue")
            .arg(&sample.queue_name)
            .arg("observed_at")
            .arg(
                sample
                    .observed_at
                    .to_rfc3339_opts(SecondsFormat::Nanos, true),
            )
            .arg("depth")
            .arg(sample.depth);
        cmd
    }
}

#[async_trait]
impl SampleStore for RedisSampleStore {
    async fn save(&self, sample: DepthSample) -> Result<(), BoxError> {
        let mut conn = self.redis.clone();
        let _id: String = self.xadd(&sample).query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_command_per_kind() {
        assert_eq!(QueueKind::List.length_command(), "LLEN");
        assert_eq!(QueueKind::Stream.length_command(), "XLEN");
        assert_eq!(QueueKind::SortedSet.length_command(), "ZCARD");
    }

    #[test]
    fn queue_kind_uses_kebab_case() {
        let kind: QueueKind = serde_json::from_str("\"sorted-set\"").unwrap();
        assert_eq!(kind, QueueKind::SortedSet);
        assert_eq!(QueueKind::default(), QueueKind::List);
    }
}
